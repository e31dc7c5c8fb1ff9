//! Top-level router combining page and operational routes.
//!
//! # Route Structure
//!
//! - `GET  /stats/{cid}` - Session statistics page (`me` redirects to the viewer)
//! - `GET  /health`      - Upstream health check
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on page routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the rate limit and static asset settings
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let pages = web::routes::page_routes().layer(rate_limit::layer(
        config.rate_limit_per_second,
        config.rate_limit_burst,
    ));

    let router = Router::new()
        .merge(pages)
        .merge(api::routes::ops_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
