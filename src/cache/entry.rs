//! Cache Entry Module
//!
//! Defines a single materialized fragment and its access metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// One generated fragment held by the cache.
///
/// `content` is never mutated in place. Regeneration replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The generated fragment
    pub content: String,
    /// Generation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Lookups served from this entry after the one that created it
    pub hit_count: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a fresh entry stamped with the current time and no hits.
    pub fn new(content: String) -> Self {
        Self {
            content,
            created_at: current_timestamp_ms(),
            hit_count: 0,
        }
    }

    // == Record Hit ==
    /// Counts one lookup served from this entry.
    pub fn record_hit(&mut self) {
        self.hit_count += 1;
    }

    // == Size ==
    /// UTF-8 byte length of the content.
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
