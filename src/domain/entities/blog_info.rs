//! Site metadata shown in the page header and the document title.

use serde::{Deserialize, Serialize};

/// Display metadata of the blog.
///
/// Served by `GET /api/info` and held by the client-side
/// [`crate::client::BlogInfoStore`]. Both fields are empty until the
/// store has fetched them at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInfo {
    pub blog_name: String,
    pub blog_title: String,
}

impl BlogInfo {
    pub fn new(blog_name: impl Into<String>, blog_title: impl Into<String>) -> Self {
        Self {
            blog_name: blog_name.into(),
            blog_title: blog_title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let info = BlogInfo::default();
        assert_eq!(info.blog_name, "");
        assert_eq!(info.blog_title, "");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_value(BlogInfo::new("Acme", "Acme Blog")).unwrap();
        assert_eq!(json["blogName"], "Acme");
        assert_eq!(json["blogTitle"], "Acme Blog");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        assert!(serde_json::from_str::<BlogInfo>(r#"{"blogName":"Acme"}"#).is_err());
    }
}
