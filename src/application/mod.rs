//! Application layer services implementing the blog's read paths.
//!
//! Services consume the [`crate::domain::note_source::NoteSource`] trait and
//! read through a shared [`cached_loader::CachedLoader`].
//!
//! # Available Services
//!
//! - [`services::blog_service::BlogService`] - Blog name and title
//! - [`services::article_service::ArticleService`] - Article listing, detail and sitemap
//! - [`services::attachment_service::AttachmentService`] - Attachments of published notes

pub mod cached_loader;
pub mod services;
