//! Stats Reporter Task
//!
//! Background task that periodically logs a cache statistics summary.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::FragmentCache;

/// Spawns a background task that logs `stats().summary()` every interval.
///
/// The task only ever takes the read lock, so it never changes hit or miss
/// counts.
///
/// # Arguments
/// * `cache` - Arc<RwLock<FragmentCache>> shared reference to the cache
/// * `interval_secs` - Seconds between reports, must be non-zero
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::with_default_generators();
/// let reporter = spawn_stats_reporter(state.cache.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter(
    cache: Arc<RwLock<FragmentCache>>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let summary = {
                let cache_guard = cache.read().await;
                cache_guard.stats().summary()
            };

            info!("Fragment cache stats: {}", summary);
        }
    })
}
