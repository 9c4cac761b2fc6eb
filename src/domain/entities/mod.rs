//! Core data structures shared by the server and the client.

mod article;
mod attachment;
mod blog_info;

pub use article::{Article, ArticleDetail, ArticlePage, Attribute};
pub use attachment::{Attachment, AttachmentMeta};
pub use blog_info::BlogInfo;
