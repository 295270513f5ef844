//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{path}`        - Short url redirect
//! - `GET  /health`        - Health check
//! - `/short-urls[/{path}]` - Short url management
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{path}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::short_url_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/short-urls/` matches
/// `/short-urls`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
