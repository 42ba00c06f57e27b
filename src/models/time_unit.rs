//! Native time units of a temporal network.
//!
//! Every numeric time stored in a network is expressed in that network's
//! declared unit. Durations the scheduler uses internally (such as the
//! search horizon) are defined in milliseconds and converted with
//! [`TimeUnit::from_millis`].
//!
//! # Conversion
//!
//! | Unit | From milliseconds |
//! |------|-------------------|
//! | Microsecond | `ms * 1000` |
//! | Millisecond | identity |
//! | Second | `ms / 1000` |
//! | Minute | `ms / 60_000` |
//! | Hour | `ms / 3_600_000` |
//! | Day | `ms / 86_400_000` |
//! | Other | identity |

use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60_000;
pub(crate) const MS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MS_PER_DAY: i64 = 86_400_000;

/// Time unit declared by a temporal network.
///
/// Unrecognized labels are kept as [`TimeUnit::Other`] and treated as
/// milliseconds for conversion purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeUnit {
    Microsecond,
    #[default]
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    /// Unrecognized unit label.
    Other(String),
}

impl TimeUnit {
    /// Parses a unit label. Case-insensitive; accepts plurals and
    /// short forms (`us`, `ms`, `s`, `min`, `h`, `d`).
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "microsecond" | "microseconds" | "us" | "µs" => Self::Microsecond,
            "millisecond" | "milliseconds" | "ms" => Self::Millisecond,
            "second" | "seconds" | "s" | "sec" => Self::Second,
            "minute" | "minutes" | "min" => Self::Minute,
            "hour" | "hours" | "h" | "hr" => Self::Hour,
            "day" | "days" | "d" => Self::Day,
            _ => Self::Other(label.to_string()),
        }
    }

    /// Converts a millisecond quantity into this unit.
    ///
    /// Coarser units use integer division (truncating toward zero);
    /// microseconds saturate instead of overflowing.
    #[inline]
    pub fn from_millis(&self, ms: i64) -> i64 {
        match self {
            Self::Microsecond => ms.saturating_mul(1_000),
            Self::Millisecond => ms,
            Self::Second => ms / MS_PER_SECOND,
            Self::Minute => ms / MS_PER_MINUTE,
            Self::Hour => ms / MS_PER_HOUR,
            Self::Day => ms / MS_PER_DAY,
            Self::Other(_) => ms,
        }
    }

    /// Whether this is one of the recognized units.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Canonical label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for TimeUnit {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for TimeUnit {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THIRTY_DAYS_MS: i64 = 30 * MS_PER_DAY;

    #[test]
    fn test_thirty_day_horizon_per_unit() {
        assert_eq!(TimeUnit::Microsecond.from_millis(THIRTY_DAYS_MS), 2_592_000_000_000);
        assert_eq!(TimeUnit::Millisecond.from_millis(THIRTY_DAYS_MS), 2_592_000_000);
        assert_eq!(TimeUnit::Second.from_millis(THIRTY_DAYS_MS), 2_592_000);
        assert_eq!(TimeUnit::Minute.from_millis(THIRTY_DAYS_MS), 43_200);
        assert_eq!(TimeUnit::Hour.from_millis(THIRTY_DAYS_MS), 720);
        assert_eq!(TimeUnit::Day.from_millis(THIRTY_DAYS_MS), 30);
    }

    #[test]
    fn test_unrecognized_unit_passes_through() {
        let unit = TimeUnit::parse("fortnight");
        assert_eq!(unit, TimeUnit::Other("fortnight".into()));
        assert!(!unit.is_recognized());
        assert_eq!(unit.from_millis(12_345), 12_345);
    }

    #[test]
    fn test_integer_division_truncates() {
        assert_eq!(TimeUnit::Second.from_millis(1_999), 1);
        assert_eq!(TimeUnit::Hour.from_millis(MS_PER_HOUR - 1), 0);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(TimeUnit::parse("MS"), TimeUnit::Millisecond);
        assert_eq!(TimeUnit::parse("Hours"), TimeUnit::Hour);
        assert_eq!(TimeUnit::parse(" day "), TimeUnit::Day);
        assert_eq!(TimeUnit::parse("us"), TimeUnit::Microsecond);
    }

    #[test]
    fn test_serde_as_label() {
        let json = serde_json::to_string(&TimeUnit::Minute).unwrap();
        assert_eq!(json, "\"minute\"");

        let unit: TimeUnit = serde_json::from_str("\"second\"").unwrap();
        assert_eq!(unit, TimeUnit::Second);

        let unit: TimeUnit = serde_json::from_str("\"tick\"").unwrap();
        assert_eq!(unit, TimeUnit::Other("tick".into()));
    }
}
