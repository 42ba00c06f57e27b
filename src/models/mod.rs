//! Temporal network domain models.
//!
//! Provides the read-only network snapshot the scheduler queries and the
//! value types its queries produce.
//!
//! # Domain Mappings
//!
//! | stn-schedule | Game planner | Calendar | Manufacturing |
//! |--------------|--------------|----------|---------------|
//! | Time point | Plan step boundary | Event edge | Operation start/end |
//! | Interval | Quest / activity | Meeting | Operation |
//! | Slot | Free hero time | Free/busy gap | Idle machine window |

mod interval;
mod network;
mod time_unit;

pub use interval::{Interval, MergedBlock, Slot};
pub use network::{
    ConstraintStore, DistanceBound, Metadata, TemporalNetwork, END_SUFFIX, START_SUFFIX,
};
pub use time_unit::TimeUnit;

pub(crate) use time_unit::MS_PER_DAY;
