//! Handler for blog metadata.

use axum::{Json, extract::State};

use crate::domain::entities::BlogInfo;
use crate::state::AppState;

/// Returns the configured blog name and title.
///
/// # Endpoint
///
/// `GET /api/info`
///
/// The client appends `?t=<millis>` to defeat HTTP caches; the parameter is
/// ignored here.
///
/// # Response
///
/// ```json
/// { "blogName": "Acme", "blogTitle": "Acme Blog" }
/// ```
pub async fn info_handler(State(state): State<AppState>) -> Json<BlogInfo> {
    Json(state.blog_service.info())
}
