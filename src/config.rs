//! Scheduler configuration.
//!
//! The only tunable is the look-ahead horizon of next-available-slot
//! search. Defaults reproduce the standard 30-day probe.
//!
//! ```toml
//! horizon_days = 30
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{TimeUnit, MS_PER_DAY};

/// Default look-ahead horizon (calendar days).
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Look-ahead horizon of next-available-slot search (calendar days).
    pub horizon_days: u32,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Sets the look-ahead horizon.
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a zero-length horizon.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        Ok(())
    }

    /// Horizon in milliseconds.
    #[inline]
    pub fn horizon_ms(&self) -> i64 {
        i64::from(self.horizon_days) * MS_PER_DAY
    }

    /// Horizon converted into a network's native unit.
    pub fn horizon_in(&self, unit: &TimeUnit) -> i64 {
        unit.from_millis(self.horizon_ms())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}
