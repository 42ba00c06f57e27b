//! Temporal network snapshot.
//!
//! A Simple Temporal Network (STN) is a set of named time points joined by
//! pairwise distance constraints. The scheduler only reads networks; they
//! are built and maintained by the owning system (planner, persistence).
//!
//! # Interval convention
//!
//! A time point named `X_start` together with a point named `X_end`
//! constitutes interval `X`. The distance constraint keyed by
//! `(X_start, X_end)` carries the interval's duration.
//!
//! # Reference
//! Dechter, Meiri & Pearl (1991), "Temporal Constraint Networks"

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::TimeUnit;

/// Suffix marking an interval's start point.
pub const START_SUFFIX: &str = "_start";
/// Suffix marking an interval's end point.
pub const END_SUFFIX: &str = "_end";

/// Open attribute bag attached to an interval.
///
/// Opaque to the scheduler; carried through to query results.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Distance bound between two time points.
///
/// Deserializes from an integer (`Exact`), a two-element array
/// (`Range`), or anything else (`Other`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistanceBound {
    /// Fixed distance.
    Exact(i64),
    /// Flexible distance `(min, max)`.
    Range(i64, i64),
    /// Value not recognized as a duration encoding.
    Other(serde_json::Value),
}

impl DistanceBound {
    /// Creates a range bound.
    pub fn range(min: i64, max: i64) -> Self {
        Self::Range(min, max)
    }

    /// Nominal duration encoded by this bound.
    ///
    /// `Exact(d)` yields `d`; `Range(min, max)` yields the midpoint
    /// (floored toward `min`). Returns `None` for `Other`, for inverted
    /// ranges (`min > max`) and whenever the duration would be negative,
    /// since an interval must never end before it starts.
    pub fn nominal_duration(&self) -> Option<i64> {
        let duration = match *self {
            Self::Exact(d) => d,
            Self::Range(min, max) if min <= max => {
                let half_span = (i128::from(max) - i128::from(min)) / 2;
                min + half_span as i64
            }
            _ => return None,
        };
        (duration >= 0).then_some(duration)
    }
}

impl From<i64> for DistanceBound {
    fn from(d: i64) -> Self {
        Self::Exact(d)
    }
}

impl From<(i64, i64)> for DistanceBound {
    fn from((min, max): (i64, i64)) -> Self {
        Self::Range(min, max)
    }
}

/// Read-only view over a constraint store.
///
/// The scheduler consumes networks only through this trait, so callers
/// can answer queries directly over their own storage.
pub trait ConstraintStore {
    /// All time point identifiers.
    fn time_points(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Whether a time point exists.
    fn has_point(&self, point: &str) -> bool;

    /// Distance bound keyed by the ordered pair `(from, to)`.
    fn bound(&self, from: &str, to: &str) -> Option<&DistanceBound>;

    /// Every constraint key as an ordered `(from, to)` pair.
    fn constraint_pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// Metadata attached to an interval id.
    fn metadata(&self, interval_id: &str) -> Option<&Metadata>;

    /// Every id that carries metadata.
    fn metadata_ids(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Native unit of every time in this store.
    fn time_unit(&self) -> &TimeUnit;
}

/// An immutable temporal network snapshot.
///
/// # Examples
///
/// ```
/// use stn_schedule::models::{DistanceBound, TemporalNetwork, TimeUnit};
///
/// let stn = TemporalNetwork::new(TimeUnit::Minute)
///     .with_interval("forge", DistanceBound::Exact(90))
///     .with_interval("travel", DistanceBound::range(30, 50));
/// assert_eq!(stn.time_points.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalNetwork {
    /// Distinct time point identifiers.
    pub time_points: BTreeSet<String>,
    /// Distance bounds keyed by ordered point pair.
    #[serde(with = "constraint_list", default)]
    pub constraints: BTreeMap<(String, String), DistanceBound>,
    /// Per-interval attribute bags.
    #[serde(default)]
    pub metadata: BTreeMap<String, Metadata>,
    /// Native time unit.
    #[serde(default)]
    pub time_unit: TimeUnit,
}

impl TemporalNetwork {
    /// Creates an empty network in the given unit.
    pub fn new(time_unit: TimeUnit) -> Self {
        Self {
            time_unit,
            ..Self::default()
        }
    }

    /// Adds a time point.
    pub fn with_point(mut self, point: impl Into<String>) -> Self {
        self.time_points.insert(point.into());
        self
    }

    /// Adds a constraint between two points (points are not added).
    pub fn with_constraint(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        bound: impl Into<DistanceBound>,
    ) -> Self {
        self.constraints
            .insert((from.into(), to.into()), bound.into());
        self
    }

    /// Adds both points of interval `id` and the duration constraint
    /// between them.
    pub fn with_interval(self, id: &str, duration: impl Into<DistanceBound>) -> Self {
        let start = format!("{id}{START_SUFFIX}");
        let end = format!("{id}{END_SUFFIX}");
        self.with_point(start.clone())
            .with_point(end.clone())
            .with_constraint(start, end, duration)
    }

    /// Attaches metadata to an interval id.
    pub fn with_metadata(mut self, interval_id: impl Into<String>, metadata: Metadata) -> Self {
        self.metadata.insert(interval_id.into(), metadata);
        self
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

impl ConstraintStore for TemporalNetwork {
    fn time_points(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.time_points.iter().map(String::as_str))
    }

    fn has_point(&self, point: &str) -> bool {
        self.time_points.contains(point)
    }

    fn bound(&self, from: &str, to: &str) -> Option<&DistanceBound> {
        // Tuple keys need owned strings for lookup.
        self.constraints.get(&(from.to_string(), to.to_string()))
    }

    fn constraint_pairs(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(
            self.constraints
                .keys()
                .map(|(from, to)| (from.as_str(), to.as_str())),
        )
    }

    fn metadata(&self, interval_id: &str) -> Option<&Metadata> {
        self.metadata.get(interval_id)
    }

    fn metadata_ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.metadata.keys().map(String::as_str))
    }

    fn time_unit(&self) -> &TimeUnit {
        &self.time_unit
    }
}

/// Serializes the pair-keyed constraint map as a list of records, since
/// JSON object keys must be strings.
mod constraint_list {
    use super::DistanceBound;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct RecordRef<'a> {
        from: &'a str,
        to: &'a str,
        bound: &'a DistanceBound,
    }

    #[derive(Deserialize)]
    struct Record {
        from: String,
        to: String,
        bound: DistanceBound,
    }

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<(String, String), DistanceBound>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.iter().map(|((from, to), bound)| RecordRef {
            from,
            to,
            bound,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<(String, String), DistanceBound>, D::Error> {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records
            .into_iter()
            .map(|r| ((r.from, r.to), r.bound))
            .collect())
    }
}
