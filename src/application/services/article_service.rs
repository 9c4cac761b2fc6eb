//! Article listing, retrieval and sitemap generation.

use std::sync::Arc;

use askama::Template;
use serde_json::json;

use crate::application::cached_loader::CachedLoader;
use crate::domain::entities::{Article, ArticleDetail, ArticlePage};
use crate::domain::note_source::NoteSource;
use crate::error::AppError;
use crate::utils::html::ContentRewriter;

/// One `<url>` entry of the sitemap.
struct SitemapUrl {
    loc: String,
    lastmod: String,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate {
    urls: Vec<SitemapUrl>,
}

/// Service for reading published articles.
///
/// All reads go through the [`CachedLoader`], keyed by page, note or
/// sitemap.
pub struct ArticleService {
    source: Arc<dyn NoteSource>,
    loader: Arc<CachedLoader>,
    rewriter: ContentRewriter,
    articles_per_page: usize,
    site_url: String,
}

impl ArticleService {
    pub fn new(
        source: Arc<dyn NoteSource>,
        loader: Arc<CachedLoader>,
        rewriter: ContentRewriter,
        articles_per_page: usize,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            loader,
            rewriter,
            articles_per_page: articles_per_page.max(1),
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn articles_per_page(&self) -> usize {
        self.articles_per_page
    }

    /// Returns one page of published articles (1-indexed).
    ///
    /// Pages past the end are empty but still report the total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the note source cannot be queried.
    pub async fn list(&self, page: usize) -> Result<ArticlePage, AppError> {
        let page = page.max(1);
        let per_page = self.articles_per_page;
        let key = format!("trilium_blog_articles:{}:{}", page, per_page);

        self.loader
            .get_or_load(&key, || async {
                let published = self.published("Failed to fetch articles").await?;
                Ok(paginate(published, page, per_page))
            })
            .await
    }

    /// Returns an article with its rewritten HTML content.
    ///
    /// Metadata and content are fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist or is not a
    /// blog post, [`AppError::Upstream`] if the note source fails.
    pub async fn get(&self, note_id: &str) -> Result<ArticleDetail, AppError> {
        let key = format!("trilium_blog_article:{}", note_id);

        self.loader
            .get_or_load(&key, || async {
                let (article, raw) = tokio::try_join!(
                    self.source.note(note_id),
                    self.source.note_content(note_id)
                )
                .map_err(|e| AppError::from_source("Failed to fetch article", e))?;

                if !article.is_blog_post() {
                    return Err(AppError::not_found(
                        "Article is not a blog post",
                        json!({ "note_id": note_id }),
                    ));
                }

                Ok(ArticleDetail {
                    article,
                    content: self.rewriter.rewrite(&raw),
                })
            })
            .await
    }

    /// Renders the sitemap listing every published article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the note source cannot be queried.
    pub async fn sitemap(&self) -> Result<String, AppError> {
        self.loader
            .get_or_load("trilium_blog_sitemap", || async {
                let published = self.published("Failed to generate sitemap").await?;
                let urls = published
                    .into_iter()
                    .map(|article| SitemapUrl {
                        loc: format!("{}/post/{}", self.site_url, article.note_id),
                        lastmod: article.date_modified,
                    })
                    .collect();

                SitemapTemplate { urls }.render().map_err(|e| {
                    AppError::internal("Failed to render sitemap", json!({ "reason": e.to_string() }))
                })
            })
            .await
    }

    async fn published(&self, message: &str) -> Result<Vec<Article>, AppError> {
        let notes = self
            .source
            .search_blog_notes()
            .await
            .map_err(|e| AppError::from_source(message, e))?;

        Ok(notes.into_iter().filter(Article::is_listed).collect())
    }
}

/// Number of pages needed for `total` items.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

fn paginate(articles: Vec<Article>, page: usize, per_page: usize) -> ArticlePage {
    let total = articles.len();
    let start = (page - 1).saturating_mul(per_page);

    let articles = articles.into_iter().skip(start).take(per_page).collect();

    ArticlePage { articles, total }
}
