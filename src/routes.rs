//! Top-level router combining the API, SEO documents and the front-end.
//!
//! # Route Structure
//!
//! - `/api/*`              - JSON API (see [`crate::api::routes`])
//! - `GET /attachments/{id}` - Attachment images referenced by article HTML
//! - `GET /sitemap.xml`    - Sitemap of published articles
//! - `GET /robots.txt`     - Crawler rules
//! - `GET /health`         - Health check: Trilium, cache
//! - `/assets/*`           - Built front-end assets, gzip variants when accepted
//! - `/favicon.ico`, `/logo.png` - Static files from the front-end build
//! - anything else         - `index.html` for the client router, or JSON 404 under `/api`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    attachment_handler, fallback_handler, health_handler, robots_handler, sitemap_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the router with all routes and middleware, without path
/// normalization.
pub fn router(state: AppState) -> Router {
    let dist = state.frontend_dist.clone();

    Router::new()
        .nest("/api", api::routes::routes())
        .route("/attachments/{attachment_id}", get(attachment_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/health", get(health_handler))
        .nest_service(
            "/assets",
            ServeDir::new(dist.join("assets")).precompressed_gzip(),
        )
        .route_service("/favicon.ico", ServeFile::new(dist.join("favicon.ico")))
        .route_service("/logo.png", ServeFile::new(dist.join("logo.png")))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed before
/// routing, so `/api/articles/` and `/api/articles` are the same endpoint.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
