//! Business logic services for the application layer.

pub mod article_service;
pub mod attachment_service;
pub mod blog_service;

pub use article_service::ArticleService;
pub use attachment_service::AttachmentService;
pub use blog_service::BlogService;
