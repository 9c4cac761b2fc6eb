//! Attachment retrieval restricted to published notes.

use std::sync::Arc;

use serde_json::json;

use crate::application::cached_loader::CachedLoader;
use crate::domain::entities::Attachment;
use crate::domain::note_source::NoteSource;
use crate::error::AppError;

/// Serves attachment bytes, but only for attachments owned by blog posts.
pub struct AttachmentService {
    source: Arc<dyn NoteSource>,
    loader: Arc<CachedLoader>,
}

impl AttachmentService {
    pub fn new(source: Arc<dyn NoteSource>, loader: Arc<CachedLoader>) -> Self {
        Self { source, loader }
    }

    /// Fetches an attachment and its mime type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the attachment does not exist or its
    /// owning note is not a blog post, [`AppError::Upstream`] on source failures.
    pub async fn get(&self, attachment_id: &str) -> Result<Attachment, AppError> {
        let key = format!("trilium_blog_attachment:{}", attachment_id);

        self.loader
            .get_or_load(&key, || async {
                let meta = self
                    .source
                    .attachment(attachment_id)
                    .await
                    .map_err(|e| AppError::from_source("Failed to fetch attachment", e))?;

                let owner = self
                    .source
                    .note(&meta.owner_id)
                    .await
                    .map_err(|e| AppError::from_source("Failed to fetch attachment", e))?;

                if !owner.is_blog_post() {
                    return Err(AppError::not_found(
                        "Attachment belongs to a non-blog post",
                        json!({ "attachment_id": attachment_id }),
                    ));
                }

                let content = self
                    .source
                    .attachment_content(attachment_id)
                    .await
                    .map_err(|e| AppError::from_source("Failed to fetch attachment", e))?;

                Ok(Attachment {
                    content,
                    mime: meta.mime,
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Article, AttachmentMeta, Attribute};
    use crate::domain::note_source::MockNoteSource;
    use crate::infrastructure::cache::NullCache;

    fn service(source: MockNoteSource) -> AttachmentService {
        let loader = Arc::new(CachedLoader::new(Arc::new(NullCache::new()), 60));
        AttachmentService::new(Arc::new(source), loader)
    }

    fn owner(published: bool) -> Article {
        Article {
            note_id: "owner".to_string(),
            kind: "text".to_string(),
            attributes: if published {
                vec![Attribute::label("blog", "true")]
            } else {
                vec![]
            },
            ..Default::default()
        }
    }

    fn meta() -> AttachmentMeta {
        AttachmentMeta {
            owner_id: "owner".to_string(),
            mime: "image/png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_attachment_of_blog_post() {
        let mut source = MockNoteSource::new();
        source.expect_attachment().returning(|_| Ok(meta()));
        source
            .expect_note()
            .withf(|id| id == "owner")
            .returning(|_| Ok(owner(true)));
        source
            .expect_attachment_content()
            .returning(|_| Ok(vec![0x89, b'P', b'N', b'G']));

        let attachment = service(source).get("att1").await.unwrap();
        assert_eq!(attachment.mime, "image/png");
        assert_eq!(attachment.content, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_attachment_of_private_note_is_hidden() {
        let mut source = MockNoteSource::new();
        source.expect_attachment().returning(|_| Ok(meta()));
        source.expect_note().returning(|_| Ok(owner(false)));
        source.expect_attachment_content().never();

        let result = service(source).get("att1").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
