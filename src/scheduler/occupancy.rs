//! Window occupancy metrics.
//!
//! Summarizes how booked a query window is, using the same merged-block
//! view as free-slot search.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Busy time | Sum of merged blocks clipped to the window |
//! | Free time | Window length minus busy time |
//! | Utilization | Busy time / window length (0 for empty windows) |
//! | Largest gap | Longest uncovered stretch inside the window |

use serde::{Deserialize, Serialize};

use super::query::get_overlapping_intervals;
use super::slots::merge_intervals;
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{ConstraintStore, MergedBlock};

/// Occupancy of a window.
///
/// All time values are in the store's native unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowOccupancy {
    pub window_start: i64,
    pub window_end: i64,
    /// Number of intervals overlapping the window.
    pub interval_count: usize,
    /// Merged blocks clipped to the window, ordered by start.
    pub busy_blocks: Vec<MergedBlock>,
    pub busy_time: i64,
    pub free_time: i64,
    /// Fraction of the window that is busy (0.0..=1.0).
    pub utilization: f64,
    /// Longest free stretch inside the window.
    pub largest_gap: i64,
}

impl WindowOccupancy {
    /// Computes occupancy of `[window_start, window_end]`.
    ///
    /// # Errors
    /// `InvalidInput` if `window_start > window_end` or the window length
    /// does not fit in an `i64`.
    pub fn calculate<S>(store: &S, window_start: i64, window_end: i64) -> SchedulerResult<Self>
    where
        S: ConstraintStore + ?Sized,
    {
        let occupied = get_overlapping_intervals(store, window_start, window_end)?;
        let length = window_end.checked_sub(window_start).ok_or_else(|| {
            SchedulerError::invalid(format!(
                "window [{window_start}, {window_end}] length overflows"
            ))
        })?;

        let busy_blocks: Vec<MergedBlock> = merge_intervals(&occupied)
            .into_iter()
            .map(|b| MergedBlock {
                start_time: b.start_time.max(window_start),
                end_time: b.end_time.min(window_end),
            })
            .collect();

        let busy_time: i64 = busy_blocks.iter().map(MergedBlock::duration).sum();

        let mut largest_gap = 0;
        let mut cursor = window_start;
        for b in &busy_blocks {
            largest_gap = largest_gap.max(b.start_time - cursor);
            cursor = b.end_time;
        }
        largest_gap = largest_gap.max(window_end - cursor);

        let utilization = if length == 0 {
            0.0
        } else {
            busy_time as f64 / length as f64
        };

        Ok(Self {
            window_start,
            window_end,
            interval_count: occupied.len(),
            busy_blocks,
            busy_time,
            free_time: length - busy_time,
            utilization,
            largest_gap,
        })
    }

    /// Whether some gap in the window can hold `duration`.
    pub fn has_room_for(&self, duration: i64) -> bool {
        duration > 0 && self.largest_gap >= duration
    }

    /// Whether every instant of a non-empty window is covered.
    pub fn is_fully_booked(&self) -> bool {
        let length = self.window_end - self.window_start;
        length > 0 && self.busy_time == length
    }
}
