//! Client half of the blog: view routing and site-metadata state.
//!
//! - [`router`] - Maps URL paths to home, article and not-found pages
//! - [`loader`] - Eager and lazily loaded views keyed by route identity
//! - [`store`] - [`BlogInfoStore`] holding the blog name and title
//! - [`api`] - [`BlogApi`] trait and its HTTP implementation
//! - [`document`] - Document title side effect
//! - [`app`] - Boot sequence wiring the pieces together
//!
//! Nothing here is global: the store and router are constructed by
//! [`ClientApp::boot`] and handed out by reference.

pub mod api;
pub mod app;
pub mod document;
pub mod loader;
pub mod router;
pub mod store;

pub use api::{BlogApi, FetchError, HttpBlogApi};
pub use app::{ClientApp, ClientConfig};
pub use document::{Document, HeadlessDocument};
pub use loader::{LazyView, LoadError, View, ViewLoader, ViewSource};
pub use router::{Navigation, RouteEntry, RouteIdentity, RouteMatch, RouterError, ViewRouter};
pub use store::{BlogInfoStore, CacheBuster};
