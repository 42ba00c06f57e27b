//! Derived intervals and free slots.
//!
//! Neither type is stored in a network: intervals are derived from
//! matched `_start`/`_end` point pairs, slots are transient query results.

use serde::{Deserialize, Serialize};

use super::Metadata;

/// An interval derived from a `X_start`/`X_end` point pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Interval id (`X` for points `X_start`/`X_end`).
    pub id: String,
    /// Start time (native unit).
    pub start_time: i64,
    /// End time (native unit).
    pub end_time: i64,
    /// Attributes carried through from the network.
    pub metadata: Metadata,
}

impl Interval {
    /// Creates an interval with empty metadata.
    pub fn new(id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            metadata: Metadata::new(),
        }
    }

    /// Sets metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Span length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Inclusive overlap test: touching endpoints count.
    #[inline]
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        self.start_time <= end && start <= self.end_time
    }
}

/// A free window of exactly the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: i64,
    pub end_time: i64,
}

impl Slot {
    /// Creates a slot.
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Slot starting at `start` lasting `duration`.
    #[inline]
    pub(crate) fn at(start: i64, duration: i64) -> Self {
        Self::new(start, start + duration)
    }

    /// Slot length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether the slot lies within `[start, end]`.
    pub fn is_within(&self, start: i64, end: i64) -> bool {
        self.start_time >= start && self.end_time <= end
    }

    /// Whether the slot shares interior time with `interval`.
    ///
    /// Slots are anchored at block edges, so touching an occupied
    /// interval's endpoint is not a clash.
    pub fn clashes_with(&self, interval: &Interval) -> bool {
        self.start_time < interval.end_time && interval.start_time < self.end_time
    }
}

/// A maximal run of overlapping or adjacent intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedBlock {
    pub start_time: i64,
    pub end_time: i64,
}

impl MergedBlock {
    /// Block covering a single interval.
    pub fn from_interval(interval: &Interval) -> Self {
        Self {
            start_time: interval.start_time,
            end_time: interval.end_time,
        }
    }

    /// Block length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether `interval` lies entirely inside this block.
    pub fn contains(&self, interval: &Interval) -> bool {
        self.start_time <= interval.start_time && interval.end_time <= self.end_time
    }
}
