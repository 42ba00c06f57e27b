//! Free-slot search.
//!
//! # Algorithm
//!
//! 1. Select the intervals overlapping the window, sorted by start.
//! 2. Merge overlapping or touching intervals into disjoint blocks.
//! 3. Scan the gaps (leading, between blocks, trailing) and emit one slot
//!    of exactly `duration` per gap that fits, anchored at the gap's
//!    earliest point.
//!
//! Next-available-slot search runs the same scan over a bounded
//! look-ahead window and returns the earliest slot.
//!
//! # Complexity
//! O(n log n) where n=intervals in the window.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Problem 16-1
//! (interval merging)

use tracing::{debug, trace};

use super::query::get_overlapping_intervals;
use crate::config::SchedulerConfig;
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{ConstraintStore, Interval, MergedBlock, Slot};

/// Merges intervals into a minimal ordered sequence of disjoint blocks.
///
/// An interval starting at or before the current block's end extends it,
/// so touching intervals end up in the same block.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<MergedBlock> {
    let mut sorted: Vec<&Interval> = intervals.iter().collect();
    sorted.sort_by_key(|i| (i.start_time, i.end_time));

    let mut blocks: Vec<MergedBlock> = Vec::new();
    for interval in sorted {
        if let Some(current) = blocks.last_mut() {
            if interval.start_time <= current.end_time {
                current.end_time = current.end_time.max(interval.end_time);
                continue;
            }
        }
        blocks.push(MergedBlock::from_interval(interval));
    }
    blocks
}

/// Emits one `duration`-long slot per gap in `[window_start, window_end]`
/// not covered by `blocks`.
///
/// `blocks` must be ordered and disjoint, as produced by
/// [`merge_intervals`].
pub fn gap_scan(
    blocks: &[MergedBlock],
    duration: i64,
    window_start: i64,
    window_end: i64,
) -> Vec<Slot> {
    let mut slots = Vec::new();

    let (Some(first), Some(last)) = (blocks.first(), blocks.last()) else {
        if window_end.saturating_sub(window_start) >= duration {
            slots.push(Slot::at(window_start, duration));
        }
        return slots;
    };

    // Leading gap
    if first.start_time.saturating_sub(window_start) >= duration {
        slots.push(Slot::at(window_start, duration));
    }

    // Internal gaps
    for pair in blocks.windows(2) {
        let gap_start = pair[0].end_time;
        if pair[1].start_time.saturating_sub(gap_start) >= duration {
            slots.push(Slot::at(gap_start, duration));
        }
    }

    // Trailing gap
    if last.end_time < window_end && window_end - last.end_time >= duration {
        slots.push(Slot::at(last.end_time, duration));
    }

    slots.sort_by_key(|s| s.start_time);
    slots
}

/// Finds free slots among an explicit set of occupied intervals.
///
/// Intervals outside the window, and intervals that end before they
/// start, are ignored.
///
/// # Errors
/// `InvalidInput` if `duration <= 0` or the window is shorter than
/// `duration`.
pub fn free_slots_among(
    intervals: &[Interval],
    duration: i64,
    window_start: i64,
    window_end: i64,
) -> SchedulerResult<Vec<Slot>> {
    ensure_slot_request(duration, window_start, window_end)?;

    let occupied: Vec<Interval> = intervals
        .iter()
        .filter(|i| i.start_time <= i.end_time && i.overlaps(window_start, window_end))
        .cloned()
        .collect();
    Ok(scan_occupied(&occupied, duration, window_start, window_end))
}

/// Finds every free slot of exactly `duration` within
/// `[window_start, window_end]`, sorted by start.
///
/// # Errors
/// `InvalidInput` if `duration <= 0` or the window is shorter than
/// `duration`.
pub fn find_free_slots<S>(
    store: &S,
    duration: i64,
    window_start: i64,
    window_end: i64,
) -> SchedulerResult<Vec<Slot>>
where
    S: ConstraintStore + ?Sized,
{
    ensure_slot_request(duration, window_start, window_end)?;

    let occupied = get_overlapping_intervals(store, window_start, window_end)?;
    Ok(scan_occupied(&occupied, duration, window_start, window_end))
}

/// Finds the earliest slot at or after `earliest_start` within the
/// configured look-ahead horizon (converted into the store's unit).
///
/// This is a single bounded probe; it never widens the window.
///
/// # Errors
/// - `InvalidInput` if `duration <= 0` or the horizon is shorter than
///   `duration`.
/// - `NoAvailableSlot` if the horizon contains no gap long enough.
pub fn find_next_available_slot<S>(
    store: &S,
    duration: i64,
    earliest_start: i64,
    config: &SchedulerConfig,
) -> SchedulerResult<Slot>
where
    S: ConstraintStore + ?Sized,
{
    let horizon = config.horizon_in(store.time_unit());
    let window_end = earliest_start.saturating_add(horizon);

    let slots = find_free_slots(store, duration, earliest_start, window_end)?;
    slots.into_iter().next().ok_or_else(|| {
        debug!(earliest_start, horizon, duration, "search horizon exhausted");
        SchedulerError::NoAvailableSlot {
            earliest_start,
            horizon,
        }
    })
}

fn scan_occupied(
    occupied: &[Interval],
    duration: i64,
    window_start: i64,
    window_end: i64,
) -> Vec<Slot> {
    let blocks = merge_intervals(occupied);
    let slots = gap_scan(&blocks, duration, window_start, window_end);
    trace!(
        occupied = occupied.len(),
        blocks = blocks.len(),
        slots = slots.len(),
        "free slot scan"
    );
    slots
}

fn ensure_slot_request(
    duration: i64,
    window_start: i64,
    window_end: i64,
) -> SchedulerResult<()> {
    if duration <= 0 {
        return Err(SchedulerError::invalid(format!(
            "duration must be positive, got {duration}"
        )));
    }
    let length = window_end.checked_sub(window_start).ok_or_else(|| {
        SchedulerError::invalid(format!(
            "window [{window_start}, {window_end}] length overflows"
        ))
    })?;
    if length < duration {
        return Err(SchedulerError::invalid(format!(
            "window [{window_start}, {window_end}] is shorter than duration {duration}"
        )));
    }
    Ok(())
}
