//! Interval scheduling queries.
//!
//! Layered as: interval extraction → overlap query and conflict check →
//! free-slot search → next-available-slot search. Every operation is a
//! pure function over a borrowed [`ConstraintStore`]; [`IntervalScheduler`]
//! binds a store and a [`SchedulerConfig`] for repeated queries.

mod extract;
mod occupancy;
mod query;
mod slots;

pub use extract::{
    extract_intervals, extract_with_report, ExtractionReport, UnresolvedInterval,
    UnresolvedReason,
};
pub use occupancy::WindowOccupancy;
pub use query::{check_conflicts, get_overlapping_intervals};
pub use slots::{
    find_free_slots, find_next_available_slot, free_slots_among, gap_scan, merge_intervals,
};

use crate::config::SchedulerConfig;
use crate::error::SchedulerResult;
use crate::models::{ConstraintStore, Interval, Slot};

/// Scheduler bound to one network snapshot.
///
/// Holds only a shared borrow, so any number of schedulers may query the
/// same snapshot concurrently.
///
/// # Example
///
/// ```
/// use stn_schedule::models::{TemporalNetwork, TimeUnit, Slot};
/// use stn_schedule::scheduler::IntervalScheduler;
///
/// let stn = TemporalNetwork::new(TimeUnit::Hour).with_interval("quest", 6);
/// let scheduler = IntervalScheduler::new(&stn);
///
/// assert_eq!(scheduler.check_conflicts(2, 3).unwrap().len(), 1);
/// assert_eq!(scheduler.find_next_available_slot(2, 0).unwrap(), Slot::new(6, 8));
/// ```
#[derive(Debug, Clone)]
pub struct IntervalScheduler<'a, S: ?Sized> {
    store: &'a S,
    config: SchedulerConfig,
}

impl<'a, S> IntervalScheduler<'a, S>
where
    S: ConstraintStore + ?Sized,
{
    /// Creates a scheduler with the default configuration.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Search horizon in the store's native unit.
    pub fn horizon(&self) -> i64 {
        self.config.horizon_in(self.store.time_unit())
    }

    /// See [`extract_intervals`].
    pub fn intervals(&self) -> Vec<Interval> {
        extract_intervals(self.store)
    }

    /// See [`extract_with_report`].
    pub fn extraction_report(&self) -> ExtractionReport {
        extract_with_report(self.store)
    }

    /// See [`get_overlapping_intervals`].
    pub fn overlapping(&self, query_start: i64, query_end: i64) -> SchedulerResult<Vec<Interval>> {
        get_overlapping_intervals(self.store, query_start, query_end)
    }

    /// See [`check_conflicts`].
    pub fn check_conflicts(&self, start: i64, end: i64) -> SchedulerResult<Vec<Interval>> {
        check_conflicts(self.store, start, end)
    }

    /// See [`find_free_slots`].
    pub fn free_slots(
        &self,
        duration: i64,
        window_start: i64,
        window_end: i64,
    ) -> SchedulerResult<Vec<Slot>> {
        find_free_slots(self.store, duration, window_start, window_end)
    }

    /// See [`find_next_available_slot`].
    pub fn find_next_available_slot(&self, duration: i64, earliest_start: i64) -> SchedulerResult<Slot> {
        find_next_available_slot(self.store, duration, earliest_start, &self.config)
    }

    /// See [`WindowOccupancy::calculate`].
    pub fn occupancy(&self, window_start: i64, window_end: i64) -> SchedulerResult<WindowOccupancy> {
        WindowOccupancy::calculate(self.store, window_start, window_end)
    }
}
