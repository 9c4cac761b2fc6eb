//! Fallback for paths no route matched.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::state::AppState;

/// Serves the single-page app for page paths and a JSON 404 for the API.
///
/// Any path under `/api` that did not match a route gets
/// `404 {"message": "Not found"}`. Everything else receives `index.html`
/// from the front-end build so the client router can resolve the page,
/// including its own not-found view.
pub async fn fallback_handler(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path().starts_with("/api") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Not found" })),
        )
            .into_response();
    }

    let index = state.frontend_dist.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(html) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response(),
        Err(e) => {
            error!("Failed to read {}: {}", index.display(), e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
