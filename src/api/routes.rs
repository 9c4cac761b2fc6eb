//! API route configuration.
//!
//! Mounted under `/api` by [`crate::routes::router`]. All endpoints are
//! public and read-only.

use crate::api::handlers::{
    article_handler, article_list_handler, attachment_handler, info_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /info`              - Blog name and title
/// - `GET /articles`          - Paginated list of published articles
/// - `GET /articles/{noteId}` - A single article with rendered content
/// - `GET /attachments/{id}`  - Raw attachment of a published article
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/info", get(info_handler))
        .route("/articles", get(article_list_handler))
        .route("/articles/{note_id}", get(article_handler))
        .route("/attachments/{attachment_id}", get(attachment_handler))
}
