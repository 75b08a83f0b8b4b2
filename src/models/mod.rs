//! Request and Response models for the fragment server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::RenderRequest;
pub use responses::{
    ClearResponse, EntryResponse, ErrorResponse, FragmentResponse, HealthResponse,
    InvalidateResponse, KeysResponse, PrewarmResponse,
};
