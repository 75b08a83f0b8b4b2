//! Fragment Cache - At-most-once memoization for dashboard view fragments
//!
//! Each fragment generator runs at most once per cache lifetime, with
//! hit/miss statistics and an HTTP surface for serving the rendered view.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fragments;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{FragmentCache, FragmentKey};
pub use config::Config;
pub use tasks::spawn_stats_reporter;
