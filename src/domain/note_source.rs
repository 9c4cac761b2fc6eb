//! Source of published notes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Article, AttachmentMeta};

/// Errors raised while talking to the note source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to note source failed: {0}")]
    Transport(String),

    #[error("note source responded with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl SourceError {
    /// Returns true if the source reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

/// Read access to the notes backing the blog.
///
/// # Implementations
///
/// - [`crate::infrastructure::trilium::TriliumClient`] - Trilium ETAPI over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Notes labelled `#blog=true`, ordered by modification date.
    async fn search_blog_notes(&self) -> Result<Vec<Article>, SourceError>;

    /// Metadata of a single note.
    async fn note(&self, note_id: &str) -> Result<Article, SourceError>;

    /// Raw HTML content of a note.
    async fn note_content(&self, note_id: &str) -> Result<String, SourceError>;

    /// Metadata of an attachment, including the owning note.
    async fn attachment(&self, attachment_id: &str) -> Result<AttachmentMeta, SourceError>;

    /// Raw bytes of an attachment.
    async fn attachment_content(&self, attachment_id: &str) -> Result<Vec<u8>, SourceError>;

    /// Checks if the source is reachable.
    async fn health_check(&self) -> bool;
}
