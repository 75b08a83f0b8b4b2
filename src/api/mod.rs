//! API Module
//!
//! HTTP handlers and routing for the fragment server.
//!
//! # Endpoints
//! - `GET /` - Rendered dashboard page
//! - `GET|DELETE /fragments/:key` - Fetch or invalidate one fragment
//! - `GET /fragments/:key/entry` - Entry metadata
//! - `POST /render` - Render a list of fragments
//! - `POST /prewarm`, `POST /clear` - Cache lifecycle
//! - `GET /keys`, `GET /stats` - Introspection
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
