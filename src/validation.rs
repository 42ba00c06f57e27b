//! Structural checks for temporal network snapshots.
//!
//! Queries tolerate incomplete networks (unresolved candidates are simply
//! dropped), so validation is advisory. It lets the owning system find
//! out why an interval is missing from query results. Detects:
//! - Constraints referencing unknown time points
//! - `_start` points without a matching `_end` (and vice versa)
//! - Interval pairs without a usable duration constraint (including
//!   negative durations)
//! - Metadata attached to ids that are not intervals

use std::collections::HashSet;

use crate::models::{ConstraintStore, END_SUFFIX, START_SUFFIX};
use crate::scheduler::{extract_with_report, UnresolvedReason};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A constraint endpoint is not a time point of the network.
    UnknownTimePoint,
    /// A `_start` point has no `_end` partner, or vice versa.
    UnpairedTimePoint,
    /// An interval pair has no constraint between its points.
    MissingDuration,
    /// An interval constraint is not a usable duration encoding, or
    /// encodes a negative duration.
    UnrecognizedDuration,
    /// Metadata is keyed by an id that is not an interval.
    OrphanMetadata,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a network snapshot through any constraint store.
///
/// Checks:
/// 1. Every constraint endpoint is a known time point
/// 2. Every `X_start` has an `X_end` and every `X_end` has an `X_start`
/// 3. Every matched pair resolves to a non-negative duration
/// 4. Every metadata key names a matched point pair
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_network<S>(store: &S) -> ValidationResult
where
    S: ConstraintStore + ?Sized,
{
    let mut errors = Vec::new();

    // Constraint endpoints
    for (from, to) in store.constraint_pairs() {
        for point in [from, to] {
            if !store.has_point(point) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTimePoint,
                    format!("Constraint ({from}, {to}) references unknown time point '{point}'"),
                ));
            }
        }
    }

    // Point pairing
    let mut paired_ids = HashSet::new();
    for point in store.time_points() {
        if let Some(id) = point.strip_suffix(START_SUFFIX) {
            if store.has_point(&format!("{id}{END_SUFFIX}")) {
                paired_ids.insert(id);
            } else {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnpairedTimePoint,
                    format!("Time point '{point}' has no matching '{id}{END_SUFFIX}'"),
                ));
            }
        } else if let Some(id) = point.strip_suffix(END_SUFFIX) {
            if !store.has_point(&format!("{id}{START_SUFFIX}")) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnpairedTimePoint,
                    format!("Time point '{point}' has no matching '{id}{START_SUFFIX}'"),
                ));
            }
        }
    }

    // Duration resolution
    let report = extract_with_report(store);
    for unresolved in &report.unresolved {
        let (kind, what) = match unresolved.reason {
            UnresolvedReason::MissingConstraint => {
                (ValidationErrorKind::MissingDuration, "has no duration constraint")
            }
            UnresolvedReason::UnrecognizedBound => (
                ValidationErrorKind::UnrecognizedDuration,
                "has an unrecognized duration constraint",
            ),
        };
        errors.push(ValidationError::new(
            kind,
            format!("Interval '{}' {what}", unresolved.interval_id),
        ));
    }

    // Metadata keys
    for id in store.metadata_ids() {
        if !paired_ids.contains(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OrphanMetadata,
                format!("Metadata attached to '{id}', which is not an interval"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
