//! Blog API client used by the store.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::domain::entities::BlogInfo;

/// Path of the site metadata endpoint.
pub const INFO_PATH: &str = "/api/info";

/// Query parameter carrying the cache-busting timestamp.
pub const CACHE_BUSTER_PARAM: &str = "t";

/// Failure classes of a metadata fetch.
///
/// The store handles every class the same way; the distinction only shows
/// up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Backend calls the client makes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// `GET /api/info?t=<cache_buster>`.
    async fn fetch_info(&self, cache_buster: i64) -> Result<BlogInfo, FetchError>;
}

/// [`BlogApi`] over HTTP.
///
/// No request timeout is configured; the HTTP client's defaults apply.
#[derive(Debug, Clone)]
pub struct HttpBlogApi {
    client: Client,
    origin: Url,
}

impl HttpBlogApi {
    /// Creates a client for the server at `origin` (e.g. `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if `origin` is not an absolute URL.
    pub fn new(origin: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: Client::new(),
            origin: Url::parse(origin)?,
        })
    }

    /// Full URL of the metadata endpoint with the cache buster applied.
    pub fn info_url(&self, cache_buster: i64) -> Result<Url, url::ParseError> {
        let mut url = self.origin.join(INFO_PATH)?;
        url.query_pairs_mut()
            .append_pair(CACHE_BUSTER_PARAM, &cache_buster.to_string());
        Ok(url)
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn fetch_info(&self, cache_buster: i64) -> Result<BlogInfo, FetchError> {
        let url = self
            .info_url(cache_buster)
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<BlogInfo>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_url_carries_timestamp() {
        let api = HttpBlogApi::new("http://localhost:8080").unwrap();
        let url = api.info_url(1_700_000_000_000).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/info?t=1700000000000");
    }

    #[test]
    fn test_info_path_is_origin_relative() {
        let api = HttpBlogApi::new("http://localhost:8080/blog/").unwrap();
        let url = api.info_url(1).unwrap();
        assert_eq!(url.path(), "/api/info");
    }

    #[test]
    fn test_relative_origin_is_rejected() {
        assert!(HttpBlogApi::new("/api").is_err());
    }
}
