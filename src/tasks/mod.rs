//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Stats Reporter: Logs a cache statistics summary at configured intervals

mod stats_reporter;

pub use stats_reporter::spawn_stats_reporter;
