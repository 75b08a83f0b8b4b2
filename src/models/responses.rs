//! Response DTOs for the fragment server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::cache::{CacheEntry, FragmentKey};

/// Response body for GET /fragments/:key
#[derive(Debug, Clone, Serialize)]
pub struct FragmentResponse {
    /// The requested fragment
    pub key: FragmentKey,
    /// Generated content
    pub content: String,
}

impl FragmentResponse {
    pub fn new(key: FragmentKey, content: impl Into<String>) -> Self {
        Self {
            key,
            content: content.into(),
        }
    }
}

/// Response body for GET /fragments/:key/entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub key: FragmentKey,
    /// Generation time (Unix milliseconds)
    pub created_at: u64,
    /// Generation time in RFC 3339
    pub created_at_iso: String,
    pub hit_count: u64,
    pub size_bytes: usize,
}

impl EntryResponse {
    /// Describes a stored entry without exposing its content.
    pub fn new(key: FragmentKey, entry: &CacheEntry) -> Self {
        Self {
            key,
            created_at: entry.created_at,
            created_at_iso: millis_to_rfc3339(entry.created_at),
            hit_count: entry.hit_count,
            size_bytes: entry.size_bytes(),
        }
    }
}

/// Response body for DELETE /fragments/:key
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub key: FragmentKey,
    /// Whether an entry was actually dropped
    pub removed: bool,
}

impl InvalidateResponse {
    pub fn new(key: FragmentKey, removed: bool) -> Self {
        Self { key, removed }
    }
}

/// Response body for POST /prewarm
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrewarmResponse {
    /// Entries created by this call
    pub generated: usize,
    /// Entries cached after the call
    pub entry_count: usize,
}

impl PrewarmResponse {
    pub fn new(generated: usize, entry_count: usize) -> Self {
        Self {
            generated,
            entry_count,
        }
    }
}

/// Response body for POST /clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    pub fn new(dropped: usize) -> Self {
        Self {
            message: format!("Cleared {} cached fragments", dropped),
        }
    }
}

/// Response body for GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Cached keys, oldest first
    pub keys: Vec<FragmentKey>,
}

impl KeysResponse {
    pub fn new(keys: Vec<FragmentKey>) -> Self {
        Self { keys }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn millis_to_rfc3339(millis: u64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
