//! Interval extraction.
//!
//! # Algorithm
//!
//! 1. Collect every time point ending in `_start`.
//! 2. Strip the suffix to get the candidate id `X`; skip it unless `X_end`
//!    exists.
//! 3. Resolve the duration from the constraint keyed by
//!    `(X_start, X_end)`: exact values are used as is, ranges collapse to
//!    their midpoint.
//! 4. Anchor the interval at zero: `[0, duration]`.
//! 5. Attach metadata by id (empty if absent).
//!
//! Candidates without a usable constraint are dropped and reported as
//! [`UnresolvedInterval`]s; they are expected in partially specified
//! networks and never fail a query.
//!
//! # Complexity
//! O(p log c) where p=time points, c=constraints.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ConstraintStore, DistanceBound, Interval, END_SUFFIX, START_SUFFIX};

/// Why a matched point pair produced no interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// No constraint keyed by `(X_start, X_end)`.
    MissingConstraint,
    /// The constraint is not a usable duration encoding.
    UnrecognizedBound,
}

/// A matched `_start`/`_end` pair that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedInterval {
    pub interval_id: String,
    pub reason: UnresolvedReason,
}

/// Extraction output including the candidates that were dropped.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Resolved intervals, ordered by id.
    pub intervals: Vec<Interval>,
    /// Matched pairs without a usable duration.
    pub unresolved: Vec<UnresolvedInterval>,
}

impl ExtractionReport {
    /// Whether every matched pair resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Extracts every interval represented in the store.
///
/// Deterministic for a fixed store: repeated calls return the same
/// intervals in the same order.
pub fn extract_intervals<S>(store: &S) -> Vec<Interval>
where
    S: ConstraintStore + ?Sized,
{
    extract_with_report(store).intervals
}

/// Extracts intervals and reports the candidates that were dropped.
pub fn extract_with_report<S>(store: &S) -> ExtractionReport
where
    S: ConstraintStore + ?Sized,
{
    let mut report = ExtractionReport::default();

    for point in store.time_points() {
        let Some(id) = point.strip_suffix(START_SUFFIX) else {
            continue;
        };
        let end_point = format!("{id}{END_SUFFIX}");
        if !store.has_point(&end_point) {
            continue;
        }

        match resolve_duration(store.bound(point, &end_point)) {
            Ok(duration) => {
                let metadata = store.metadata(id).cloned().unwrap_or_default();
                report
                    .intervals
                    .push(Interval::new(id, 0, duration).with_metadata(metadata));
            }
            Err(reason) => {
                debug!(interval_id = id, ?reason, "dropping unresolved interval");
                report.unresolved.push(UnresolvedInterval {
                    interval_id: id.to_string(),
                    reason,
                });
            }
        }
    }

    // Stores may yield points in any order.
    report.intervals.sort_by(|a, b| a.id.cmp(&b.id));
    report
        .unresolved
        .sort_by(|a, b| a.interval_id.cmp(&b.interval_id));
    report
}

fn resolve_duration(bound: Option<&DistanceBound>) -> Result<i64, UnresolvedReason> {
    bound
        .ok_or(UnresolvedReason::MissingConstraint)?
        .nominal_duration()
        .ok_or(UnresolvedReason::UnrecognizedBound)
}
