//! Error types for scheduling queries and configuration.
//!
//! Queries over a network snapshot perform no I/O, so every error here is
//! terminal: a violated precondition or an exhausted search horizon.
//! Intervals that cannot be resolved from the network are not errors;
//! see [`UnresolvedInterval`](crate::scheduler::UnresolvedInterval).

/// Errors returned by scheduling queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// A query precondition was violated (inverted window, non-positive
    /// duration, window shorter than the requested duration).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The bounded look-ahead window contains no gap long enough.
    #[error("no available slot within {horizon} units of {earliest_start}")]
    NoAvailableSlot { earliest_start: i64, horizon: i64 },
}

impl SchedulerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Errors raised while loading a [`SchedulerConfig`](crate::config::SchedulerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("search horizon must be at least one day")]
    ZeroHorizon,
}

/// Result alias for scheduling queries.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
