//! Handler for note attachments.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Streams an attachment of a published note with its stored mime type.
///
/// # Endpoint
///
/// `GET /api/attachments/{id}` and `GET /attachments/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the attachment is missing or belongs to an
/// unpublished note, 502 Bad Gateway on other Trilium failures.
pub async fn attachment_handler(
    State(state): State<AppState>,
    Path(attachment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attachment = state.attachment_service.get(&attachment_id).await?;

    let mime = if attachment.mime.is_empty() {
        "application/octet-stream".to_string()
    } else {
        attachment.mime
    };

    Ok(([(header::CONTENT_TYPE, mime)], attachment.content))
}
