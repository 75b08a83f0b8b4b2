//! Error types for the fragment server
//!
//! The cache itself is infallible. These errors only arise at the HTTP
//! boundary, where keys arrive as untyped strings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Fragment Error Enum ==
/// Unified error type for the fragment server.
#[derive(Error, Debug)]
pub enum FragmentError {
    /// Name does not match any registered fragment
    #[error("Unknown fragment key: {0}")]
    UnknownKey(String),

    /// Fragment is known but has no entry in the cache
    #[error("Fragment not cached: {0}")]
    NotCached(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for FragmentError {
    fn into_response(self) -> Response {
        let status = match &self {
            FragmentError::UnknownKey(_) => StatusCode::NOT_FOUND,
            FragmentError::NotCached(_) => StatusCode::NOT_FOUND,
            FragmentError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the fragment server.
pub type Result<T> = std::result::Result<T, FragmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (FragmentError::UnknownKey("x".into()), StatusCode::NOT_FOUND),
            (FragmentError::NotCached("header".into()), StatusCode::NOT_FOUND),
            (FragmentError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_display_includes_key() {
        let error = FragmentError::UnknownKey("sidebar".into());
        assert_eq!(error.to_string(), "Unknown fragment key: sidebar");
    }
}
