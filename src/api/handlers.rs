//! API Handlers
//!
//! HTTP request handlers for each fragment server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use crate::cache::{CacheStats, FragmentCache, FragmentKey};
use crate::error::{FragmentError, Result};
use crate::fragments::{default_generators, render_dashboard, render_fragments};
use crate::models::{
    ClearResponse, EntryResponse, FragmentResponse, HealthResponse, InvalidateResponse,
    KeysResponse, PrewarmResponse, RenderRequest,
};

/// Application state shared across all handlers.
///
/// Owns the process-wide fragment cache. Lookups take the write lock for
/// their whole duration, so generation for a key can never run twice
/// concurrently.
#[derive(Clone)]
pub struct AppState {
    /// Shared fragment cache
    pub cache: Arc<RwLock<FragmentCache>>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: FragmentCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState over the built-in dashboard generators.
    pub fn with_default_generators() -> Self {
        Self::new(FragmentCache::new(default_generators()))
    }
}

fn parse_key(name: &str) -> Result<FragmentKey> {
    name.parse()
}

/// Handler for GET /
///
/// Renders the whole dashboard from cached fragments.
pub async fn dashboard_handler(State(state): State<AppState>) -> Html<String> {
    let mut cache = state.cache.write().await;
    Html(render_dashboard(&mut cache))
}

/// Handler for GET /fragments/:key
pub async fn fragment_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FragmentResponse>> {
    let key = parse_key(&name)?;

    // Write lock: a lookup may generate and always updates stats
    let mut cache = state.cache.write().await;
    let content = cache.get(key);

    Ok(Json(FragmentResponse::new(key, content)))
}

/// Handler for GET /fragments/:key/entry
///
/// Peeks at entry metadata without counting a hit.
pub async fn entry_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<EntryResponse>> {
    let key = parse_key(&name)?;

    let cache = state.cache.read().await;
    let entry = cache
        .entry(key)
        .ok_or_else(|| FragmentError::NotCached(key.to_string()))?;

    Ok(Json(EntryResponse::new(key, entry)))
}

/// Handler for DELETE /fragments/:key
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let key = parse_key(&name)?;

    let mut cache = state.cache.write().await;
    let removed = cache.invalidate(key);

    Ok(Json(InvalidateResponse::new(key, removed)))
}

/// Handler for POST /render
///
/// Concatenates the requested fragments in request order.
pub async fn render_handler(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>> {
    let keys = req.parse_keys()?;

    let mut cache = state.cache.write().await;
    Ok(Html(render_fragments(&mut cache, &keys)))
}

/// Handler for POST /prewarm
pub async fn prewarm_handler(State(state): State<AppState>) -> Json<PrewarmResponse> {
    let mut cache = state.cache.write().await;
    let generated = cache.prewarm();

    Json(PrewarmResponse::new(generated, cache.len()))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let dropped = cache.len();
    cache.clear();

    Json(ClearResponse::new(dropped))
}

/// Handler for GET /keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let cache = state.cache.read().await;
    Json(KeysResponse::new(cache.keys()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    Json(cache.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
