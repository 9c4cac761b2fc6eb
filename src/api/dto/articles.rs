//! DTOs for article endpoints.

use serde::Serialize;

use crate::application::services::article_service::total_pages;
use crate::domain::entities::{Article, ArticleDetail, ArticlePage};

/// Response of `GET /api/articles`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_articles: usize,
    pub articles_per_page: usize,
}

impl ArticleListResponse {
    pub fn new(page: ArticlePage, current_page: usize, articles_per_page: usize) -> Self {
        Self {
            total_pages: total_pages(page.total, articles_per_page),
            total_articles: page.total,
            articles: page.articles,
            current_page,
            articles_per_page,
        }
    }
}

/// Response of `GET /api/articles/{noteId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub title: String,
    pub blog_name: String,
    pub domain: String,
    pub note_id: String,
    pub content: String,
    /// Value of the note's `pageUrl` attribute, empty when absent.
    pub page_url: String,
    pub date_modified: String,
}

impl ArticleResponse {
    pub fn new(detail: ArticleDetail, blog_name: &str, domain: &str) -> Self {
        let page_url = detail
            .article
            .attribute("pageUrl")
            .unwrap_or_default()
            .to_string();

        Self {
            title: detail.article.title,
            blog_name: blog_name.to_string(),
            domain: domain.to_string(),
            note_id: detail.article.note_id,
            content: detail.content,
            page_url,
            date_modified: detail.article.date_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Attribute;

    #[test]
    fn test_list_response_shape() {
        let page = ArticlePage {
            articles: vec![Article::default()],
            total: 21,
        };

        let json = serde_json::to_value(ArticleListResponse::new(page, 3, 10)).unwrap();
        assert_eq!(json["currentPage"], 3);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalArticles"], 21);
        assert_eq!(json["articlesPerPage"], 10);
        assert_eq!(json["articles"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_article_response_page_url() {
        let article = Article {
            note_id: "abc".to_string(),
            title: "Hello".to_string(),
            date_modified: "2024-05-01".to_string(),
            attributes: vec![
                Attribute::label("blog", "true"),
                Attribute::label("pageUrl", "hello-world"),
            ],
            ..Default::default()
        };
        let detail = ArticleDetail {
            article,
            content: "<p>hi</p>".to_string(),
        };

        let json =
            serde_json::to_value(ArticleResponse::new(detail, "Acme", "blog.example.com")).unwrap();
        assert_eq!(json["noteId"], "abc");
        assert_eq!(json["pageUrl"], "hello-world");
        assert_eq!(json["blogName"], "Acme");
        assert_eq!(json["domain"], "blog.example.com");
        assert_eq!(json["dateModified"], "2024-05-01");
        assert_eq!(json["content"], "<p>hi</p>");
    }

    #[test]
    fn test_article_response_without_page_url() {
        let detail = ArticleDetail {
            article: Article::default(),
            content: String::new(),
        };

        let json = serde_json::to_value(ArticleResponse::new(detail, "", "")).unwrap();
        assert_eq!(json["pageUrl"], "");
    }
}
