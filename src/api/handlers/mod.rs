//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod articles;
pub mod attachments;
pub mod fallback;
pub mod health;
pub mod info;
pub mod seo;

pub use articles::{article_handler, article_list_handler};
pub use attachments::attachment_handler;
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use seo::{robots_handler, sitemap_handler};
