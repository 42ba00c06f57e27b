//! Interval scheduling over Simple Temporal Networks.
//!
//! Answers read-side scheduling queries against an immutable snapshot of a
//! temporal network: which intervals exist, which overlap a window, whether
//! a candidate would conflict, and where free time remains. Building the
//! network and propagating its constraints is left to the owning system.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TemporalNetwork`, `DistanceBound`,
//!   `TimeUnit`, `Interval`, `Slot`, `MergedBlock`, and the
//!   `ConstraintStore` trait queries consume
//! - **`scheduler`**: Interval extraction, overlap queries, conflict checks,
//!   free-slot and next-available-slot search, window occupancy
//! - **`validation`**: Structural checks (unpaired points, missing durations)
//! - **`config`**: Search horizon configuration
//! - **`error`**: Query and configuration errors
//!
//! # Time Model
//!
//! All times are integers in the network's declared [`models::TimeUnit`].
//! Derived intervals are anchored at zero and span their nominal duration;
//! see [`scheduler::extract_intervals`].
//!
//! # References
//!
//! - Dechter, Meiri & Pearl (1991), "Temporal Constraint Networks"
//! - Cormen et al. (2009), "Introduction to Algorithms"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{ConfigError, SchedulerError, SchedulerResult};
pub use scheduler::IntervalScheduler;
