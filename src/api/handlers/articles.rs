//! Handlers for article listing and retrieval.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::articles::{ArticleListResponse, ArticleResponse};
use crate::api::dto::pagination::PageQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists published articles, newest modification first as Trilium orders them.
///
/// # Endpoint
///
/// `GET /api/articles?page=N`
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number; invalid values select page 1
///
/// # Errors
///
/// Returns 502 Bad Gateway if Trilium cannot be queried.
pub async fn article_list_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ArticleListResponse>, AppError> {
    let page = query.page();
    let per_page = state.article_service.articles_per_page();

    let articles = state.article_service.list(page).await?;

    Ok(Json(ArticleListResponse::new(articles, page, per_page)))
}

/// Returns a single article with its rendered content.
///
/// # Endpoint
///
/// `GET /api/articles/{noteId}`
///
/// # Errors
///
/// Returns 404 Not Found if the note does not exist or is not published.
/// Returns 502 Bad Gateway on other Trilium failures.
pub async fn article_handler(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Json<ArticleResponse>, AppError> {
    let detail = state.article_service.get(&note_id).await?;

    Ok(Json(ArticleResponse::new(
        detail,
        state.blog_service.blog_name(),
        state.blog_service.domain(),
    )))
}
