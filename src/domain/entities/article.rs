//! Article entity mirroring a Trilium note.

use serde::{Deserialize, Serialize};

/// A Trilium note as returned by the ETAPI.
///
/// Only notes carrying the `#blog=true` label are published. Fields the
/// ETAPI omits (`summary`, `content`) default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub note_id: String,
    pub title: String,
    pub date_modified: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mime: String,
    pub summary: String,
    pub content: String,
    pub attributes: Vec<Attribute>,
}

impl Article {
    /// Returns true if the note carries the `blog=true` label.
    pub fn is_blog_post(&self) -> bool {
        self.attributes.iter().any(Attribute::is_blog_label)
    }

    /// Returns true if the note belongs in article listings and the sitemap.
    pub fn is_listed(&self) -> bool {
        self.kind == "text" && self.is_blog_post()
    }

    /// Value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// A label or relation attached to a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn label(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: "label".to_string(),
            name: name.into(),
            value: value.into(),
        }
    }

    fn is_blog_label(&self) -> bool {
        self.kind == "label" && self.name == "blog" && self.value == "true"
    }
}

/// Article together with its rendered HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub content: String,
}

/// One page of published articles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: usize,
}
