//! Domain services.

pub mod schedule;

pub use schedule::{SchedulePolicy, ScheduleError};
