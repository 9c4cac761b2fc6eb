//! # Trilium Blog
//!
//! Publishes Trilium notes labelled `#blog=true` as a blog: a JSON API over the
//! Trilium ETAPI, plus the client-side routing and site-metadata state the
//! single-page front-end runs on.
//!
//! ## Architecture
//!
//! - **Client** ([`client`]) - View router with a lazily loaded article view,
//!   and the blog-info store that fetches `/api/info` and sets the document title
//! - **Domain Layer** ([`domain`]) - Notes, attachments, blog info and the
//!   [`domain::note_source::NoteSource`] trait
//! - **Application Layer** ([`application`]) - Article, attachment and blog
//!   services reading through a cache
//! - **Infrastructure Layer** ([`infrastructure`]) - Trilium ETAPI client and
//!   Redis cache
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export TRILIUM_API_URL="http://localhost:8080"
//! export TRILIUM_TOKEN="etapi-token"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run -- 3000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArticleService, AttachmentService, BlogService};
    pub use crate::client::{BlogInfoStore, ClientApp, RouteIdentity, ViewRouter};
    pub use crate::domain::entities::{Article, BlogInfo};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
