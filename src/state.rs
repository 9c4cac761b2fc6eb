//! Shared application state injected into handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::cached_loader::CachedLoader;
use crate::application::services::{ArticleService, AttachmentService, BlogService};
use crate::config::Config;
use crate::domain::entities::BlogInfo;
use crate::domain::note_source::NoteSource;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::trilium::TriliumClient;
use crate::utils::html::ContentRewriter;

/// Application state shared across all request handlers.
///
/// Cloning is cheap: every service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService>,
    pub article_service: Arc<ArticleService>,
    pub attachment_service: Arc<AttachmentService>,
    pub source: Arc<dyn NoteSource>,
    pub cache: Arc<dyn CacheService>,
    /// Directory holding the built front-end (`index.html`, `assets/`).
    pub frontend_dist: PathBuf,
    /// Public base URL, used for the sitemap line in `robots.txt`.
    pub site_url: String,
}

impl AppState {
    /// Wires services on top of an existing note source and cache.
    pub fn new(config: &Config, source: Arc<dyn NoteSource>, cache: Arc<dyn CacheService>) -> Self {
        let loader = Arc::new(CachedLoader::new(cache.clone(), config.cache_ttl_seconds));

        let blog_service = Arc::new(BlogService::new(
            BlogInfo::new(&config.blog_name, &config.blog_title),
            &config.domain,
        ));

        let article_service = Arc::new(ArticleService::new(
            source.clone(),
            loader.clone(),
            ContentRewriter::new(config.image_proxy_url.clone(), &config.domain),
            config.articles_per_page,
            &config.site_url,
        ));

        let attachment_service = Arc::new(AttachmentService::new(source.clone(), loader));

        Self {
            blog_service,
            article_service,
            attachment_service,
            source,
            cache,
            frontend_dist: config.frontend_dist.clone(),
            site_url: config.site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the state with a [`TriliumClient`] as the note source.
    ///
    /// # Errors
    ///
    /// Returns an error if the Trilium HTTP client cannot be created.
    pub fn from_config(config: &Config, cache: Arc<dyn CacheService>) -> Result<Self> {
        let client = TriliumClient::new(
            &config.trilium_api_url,
            &config.trilium_token,
            config.trilium_timeout(),
        )
        .context("Failed to create Trilium client")?;

        Ok(Self::new(config, Arc::new(client), cache))
    }
}
