//! Overlap queries and conflict checks.
//!
//! Overlap uses inclusive boundaries: an interval overlaps `[a, b]` iff
//! `start <= b && a <= end`. Touching at an endpoint counts.

use tracing::trace;

use super::extract::extract_intervals;
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{ConstraintStore, Interval};

/// Returns every interval intersecting `[query_start, query_end]`.
///
/// # Errors
/// `InvalidInput` if `query_start > query_end`.
pub fn get_overlapping_intervals<S>(
    store: &S,
    query_start: i64,
    query_end: i64,
) -> SchedulerResult<Vec<Interval>>
where
    S: ConstraintStore + ?Sized,
{
    ensure_ordered("query", query_start, query_end)?;

    let overlapping: Vec<Interval> = extract_intervals(store)
        .into_iter()
        .filter(|i| i.overlaps(query_start, query_end))
        .collect();

    trace!(
        query_start,
        query_end,
        matches = overlapping.len(),
        "overlap query"
    );
    Ok(overlapping)
}

/// Returns the existing intervals a candidate `[start, end]` would overlap.
///
/// Empty means no conflict. The candidate is not registered anywhere.
///
/// # Errors
/// `InvalidInput` if `start > end`.
pub fn check_conflicts<S>(store: &S, start: i64, end: i64) -> SchedulerResult<Vec<Interval>>
where
    S: ConstraintStore + ?Sized,
{
    ensure_ordered("candidate", start, end)?;
    get_overlapping_intervals(store, start, end)
}

fn ensure_ordered(what: &str, start: i64, end: i64) -> SchedulerResult<()> {
    if start > end {
        return Err(SchedulerError::invalid(format!(
            "{what} start {start} is after end {end}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TemporalNetwork, TimeUnit};

    fn sample() -> TemporalNetwork {
        // All extracted intervals are anchored at zero.
        TemporalNetwork::new(TimeUnit::Millisecond)
            .with_interval("short", 10)
            .with_interval("medium", 50)
            .with_interval("long", (80, 120))
    }

    fn ids(intervals: &[Interval]) -> Vec<&str> {
        intervals.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_overlap_window() {
        let stn = sample();
        let hits = get_overlapping_intervals(&stn, 20, 60).unwrap();
        assert_eq!(ids(&hits), vec!["long", "medium"]);
    }

    #[test]
    fn test_touching_boundary_included() {
        let stn = sample();
        let hits = get_overlapping_intervals(&stn, 10, 10).unwrap();
        assert_eq!(ids(&hits), vec!["long", "medium", "short"]);

        let hits = get_overlapping_intervals(&stn, 100, 500).unwrap();
        assert_eq!(ids(&hits), vec!["long"]);

        let hits = get_overlapping_intervals(&stn, 101, 500).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let stn = sample();
        let err = get_overlapping_intervals(&stn, 10, 5).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidInput(_)));
    }

    #[test]
    fn test_check_conflicts() {
        let stn = sample();
        let conflicts = check_conflicts(&stn, 60, 90).unwrap();
        assert_eq!(ids(&conflicts), vec!["long"]);

        assert!(check_conflicts(&stn, 200, 300).unwrap().is_empty());
        assert!(check_conflicts(&stn, 300, 200).is_err());
    }

    #[test]
    fn test_conflict_check_does_not_mutate() {
        let stn = sample();
        let before = stn.clone();
        let _ = check_conflicts(&stn, 0, 1000).unwrap();
        assert_eq!(stn, before);
    }
}
