//! Client application boot sequence.

use std::sync::{Arc, RwLock};

use super::api::BlogApi;
use super::document::Document;
use super::loader::{LoadError, ViewLoader};
use super::router::{Navigation, RouteMatch, ViewRouter};
use super::store::BlogInfoStore;

/// Client-side settings.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Prefix the app is served under; root when `None`.
    pub base_path: Option<String>,
}

/// The mounted client: router, store and document wired together.
pub struct ClientApp {
    router: ViewRouter,
    store: Arc<BlogInfoStore>,
    document: Arc<dyn Document>,
    current: RwLock<Option<RouteMatch>>,
}

impl ClientApp {
    /// Builds the router and store with the default views, mounts
    /// `initial_path` and refreshes the blog info once.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the view for the initial path cannot be loaded.
    /// A failed blog-info fetch does not fail the boot.
    pub async fn boot(
        config: ClientConfig,
        api: Arc<dyn BlogApi>,
        document: Arc<dyn Document>,
        initial_path: &str,
    ) -> Result<Self, LoadError> {
        Self::boot_with_views(config, ViewLoader::default(), api, document, initial_path).await
    }

    /// Same as [`ClientApp::boot`] with a caller-supplied view registry.
    pub async fn boot_with_views(
        config: ClientConfig,
        views: ViewLoader,
        api: Arc<dyn BlogApi>,
        document: Arc<dyn Document>,
        initial_path: &str,
    ) -> Result<Self, LoadError> {
        let router = ViewRouter::new(config.base_path.as_deref(), views);
        let store = Arc::new(BlogInfoStore::new(api, document.clone()));

        let app = Self {
            router,
            store,
            document,
            current: RwLock::new(None),
        };

        app.navigate(initial_path).await?;
        app.store.fetch_blog_info().await;

        tracing::info!(base = app.router.base(), path = initial_path, "client mounted");
        Ok(app)
    }

    /// Navigates to `path`, loading its view and recording it as current.
    pub async fn navigate(&self, path: &str) -> Result<Navigation, LoadError> {
        let navigation = self.router.navigate(path).await?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) =
            Some(navigation.route.clone());
        Ok(navigation)
    }

    pub fn current_route(&self) -> Option<RouteMatch> {
        self.current.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn store(&self) -> &Arc<BlogInfoStore> {
        &self.store
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::{FetchError, MockBlogApi};
    use crate::client::document::HeadlessDocument;
    use crate::client::router::RouteIdentity;
    use crate::domain::entities::BlogInfo;

    #[tokio::test]
    async fn test_boot_mounts_initial_route_and_fetches_info() {
        let mut api = MockBlogApi::new();
        api.expect_fetch_info()
            .times(1)
            .returning(|_| Ok(BlogInfo::new("Acme", "Acme Blog")));

        let document = Arc::new(HeadlessDocument::new());
        let app = ClientApp::boot(
            ClientConfig::default(),
            Arc::new(api),
            document.clone(),
            "/post/abc123",
        )
        .await
        .unwrap();

        let current = app.current_route().unwrap();
        assert_eq!(current.identity, RouteIdentity::Article);
        assert_eq!(current.note_id(), Some("abc123"));
        assert_eq!(app.store().blog_info().blog_name, "Acme");
        assert_eq!(document.title(), "Acme Blog");
    }

    #[tokio::test]
    async fn test_boot_survives_fetch_failure() {
        let mut api = MockBlogApi::new();
        api.expect_fetch_info()
            .returning(|_| Err(FetchError::Status(503)));

        let app = ClientApp::boot(
            ClientConfig {
                base_path: Some("/blog".to_string()),
            },
            Arc::new(api),
            Arc::new(HeadlessDocument::new()),
            "/blog/",
        )
        .await
        .unwrap();

        assert_eq!(app.current_route().unwrap().identity, RouteIdentity::Home);
        assert_eq!(app.store().blog_info(), BlogInfo::default());
        assert!(!app.router().is_view_loaded(RouteIdentity::Article));

        let nav = app.navigate("/blog/nowhere").await.unwrap();
        assert_eq!(nav.view.component(), "NotFound");
        assert_eq!(app.current_route().unwrap().identity, RouteIdentity::NotFound);
    }
}
