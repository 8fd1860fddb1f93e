//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET /`            - Landing page
//! - `GET /movies`      - Server-rendered movie list
//! - `GET /api/movies`  - Movie list as JSON
//! - `GET /health`      - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on page and API routes
//! - **Path normalization** - Trailing slash handling (`/movies/` serves `/movies`)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let upstream_routes = Router::new()
        .merge(web::routes::page_routes())
        .nest("/api", api::routes::api_routes());

    let upstream_routes = if behind_proxy {
        upstream_routes.layer(rate_limit::proxy_layer())
    } else {
        upstream_routes.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(upstream_routes)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
