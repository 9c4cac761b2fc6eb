//! Handlers for crawler-facing documents.

use askama::Template;
use axum::{extract::State, http::header, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "robots.txt")]
struct RobotsTemplate<'a> {
    sitemap_url: &'a str,
}

/// Returns the sitemap of all published articles.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
///
/// # Errors
///
/// Returns 502 Bad Gateway if Trilium cannot be queried.
pub async fn sitemap_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let xml = state.article_service.sitemap().await?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

/// Allows every crawler and points it at the sitemap.
///
/// # Endpoint
///
/// `GET /robots.txt`
pub async fn robots_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sitemap_url = format!("{}/sitemap.xml", state.site_url);

    let body = RobotsTemplate {
        sitemap_url: &sitemap_url,
    }
    .render()
    .map_err(|e| {
        AppError::internal(
            "Failed to render robots.txt",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
