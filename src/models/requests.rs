//! Request DTOs for the fragment server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::FragmentKey;
use crate::error::{FragmentError, Result};

/// Request body for POST /render
///
/// # Fields
/// - `keys`: Fragment names to render, in output order
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    /// Fragment names
    pub keys: Vec<String>,
}

impl RenderRequest {
    /// Validates the request and resolves every name to a key.
    pub fn parse_keys(&self) -> Result<Vec<FragmentKey>> {
        if self.keys.is_empty() {
            return Err(FragmentError::InvalidRequest(
                "At least one fragment key is required".to_string(),
            ));
        }
        self.keys.iter().map(|name| name.parse()).collect()
    }
}
