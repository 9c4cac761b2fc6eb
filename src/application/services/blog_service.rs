//! Site metadata service.

use crate::domain::entities::BlogInfo;

/// Serves the configured blog name and title.
pub struct BlogService {
    info: BlogInfo,
    domain: String,
}

impl BlogService {
    pub fn new(info: BlogInfo, domain: impl Into<String>) -> Self {
        Self {
            info,
            domain: domain.into(),
        }
    }

    pub fn info(&self) -> BlogInfo {
        self.info.clone()
    }

    pub fn blog_name(&self) -> &str {
        &self.info.blog_name
    }

    /// Public domain the blog is served from.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}
