//! On-demand view loading keyed by route identity.
//!
//! Eager views are available immediately. Lazy views run their loader on the
//! first navigation that needs them; the result is cached and concurrent
//! first navigations share a single load. A failed load is not cached.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use super::router::RouteIdentity;

/// Handle to a page component owned by the rendering runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View {
    component: Arc<str>,
}

impl View {
    pub fn new(component: impl Into<Arc<str>>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

/// Errors raised while resolving a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to load view `{component}`: {reason}")]
    Failed { component: String, reason: String },

    #[error("no view registered for route {0}")]
    Unregistered(RouteIdentity),
}

type LoadFuture = Pin<Box<dyn Future<Output = Result<View, LoadError>> + Send>>;
type LoadFn = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// A view whose code is fetched on first use.
pub struct LazyView {
    loader: LoadFn,
    cell: OnceCell<View>,
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.cell.get())
            .finish()
    }
}

impl LazyView {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<View, LoadError>> + Send + 'static,
    {
        Self {
            loader: Arc::new(move || Box::pin(loader()) as LoadFuture),
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached view, running the loader if nothing is cached yet.
    pub async fn get(&self) -> Result<View, LoadError> {
        self.cell.get_or_try_init(|| (self.loader)()).await.cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

/// How the view for a route is obtained.
#[derive(Debug)]
pub enum ViewSource {
    Eager(View),
    Lazy(LazyView),
}

/// Registry of views, one per route identity.
#[derive(Debug)]
pub struct ViewLoader {
    sources: HashMap<RouteIdentity, ViewSource>,
}

impl Default for ViewLoader {
    /// Eager home and not-found pages, lazily loaded article page.
    fn default() -> Self {
        Self::empty()
            .with_eager(RouteIdentity::Home, View::new("Home"))
            .with_eager(RouteIdentity::NotFound, View::new("NotFound"))
            .with_lazy(RouteIdentity::Article, || async {
                Ok(View::new("Article"))
            })
    }
}

impl ViewLoader {
    /// Creates a loader with no registered views.
    pub fn empty() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    pub fn with_eager(mut self, identity: RouteIdentity, view: View) -> Self {
        self.sources.insert(identity, ViewSource::Eager(view));
        self
    }

    pub fn with_lazy<F, Fut>(mut self, identity: RouteIdentity, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<View, LoadError>> + Send + 'static,
    {
        self.sources
            .insert(identity, ViewSource::Lazy(LazyView::new(loader)));
        self
    }

    /// Resolves the view for a route, loading it if needed.
    pub async fn load(&self, identity: RouteIdentity) -> Result<View, LoadError> {
        match self.sources.get(&identity) {
            Some(ViewSource::Eager(view)) => Ok(view.clone()),
            Some(ViewSource::Lazy(lazy)) => {
                let first = !lazy.is_loaded();
                let view = lazy.get().await?;
                if first {
                    tracing::debug!(route = %identity, component = view.component(), "view loaded");
                }
                Ok(view)
            }
            None => Err(LoadError::Unregistered(identity)),
        }
    }

    pub fn is_loaded(&self, identity: RouteIdentity) -> bool {
        match self.sources.get(&identity) {
            Some(ViewSource::Eager(_)) => true,
            Some(ViewSource::Lazy(lazy)) => lazy.is_loaded(),
            None => false,
        }
    }
}
