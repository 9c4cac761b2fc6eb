//! Trilium ETAPI client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::entities::{Article, AttachmentMeta};
use crate::domain::note_source::{NoteSource, SourceError};

/// Search expression selecting published notes.
const BLOG_SEARCH: &str = "#blog=true";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Article>,
}

/// [`NoteSource`] backed by a Trilium instance's ETAPI.
///
/// Every request carries the ETAPI token in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct TriliumClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TriliumClient {
    /// Creates a client for the Trilium server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/etapi/{}", self.base_url, path);
        debug!("Requesting Trilium API: {}", url);
        self.http.get(url).header(AUTHORIZATION, &self.token)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, SourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Trilium API request failed with status: {}", status);
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        self.send(self.get(path))
            .await?
            .json::<T>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl NoteSource for TriliumClient {
    async fn search_blog_notes(&self) -> Result<Vec<Article>, SourceError> {
        let request = self
            .get("notes")
            .query(&[("search", BLOG_SEARCH), ("orderBy", "utcDateModified")]);

        let response: SearchResponse = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(response.results)
    }

    async fn note(&self, note_id: &str) -> Result<Article, SourceError> {
        self.get_json(&format!("notes/{}", urlencoding::encode(note_id)))
            .await
    }

    async fn note_content(&self, note_id: &str) -> Result<String, SourceError> {
        let path = format!("notes/{}/content", urlencoding::encode(note_id));
        self.send(self.get(&path))
            .await?
            .text()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn attachment(&self, attachment_id: &str) -> Result<AttachmentMeta, SourceError> {
        self.get_json(&format!("attachments/{}", urlencoding::encode(attachment_id)))
            .await
    }

    async fn attachment_content(&self, attachment_id: &str) -> Result<Vec<u8>, SourceError> {
        let path = format!("attachments/{}/content", urlencoding::encode(attachment_id));
        let bytes = self
            .send(self.get(&path))
            .await?
            .bytes()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn health_check(&self) -> bool {
        match self.send(self.get("app-info")).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Trilium health check failed: {}", e);
                false
            }
        }
    }
}
