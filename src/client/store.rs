//! Blog-info store: the client's copy of the site metadata.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::{debug, error};

use super::api::BlogApi;
use super::document::Document;
use crate::domain::entities::BlogInfo;

/// Produces cache-busting timestamps in Unix milliseconds.
///
/// Values are strictly increasing per instance, even when two calls land in
/// the same millisecond or the wall clock steps backwards.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicI64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}

/// Holds the current [`BlogInfo`] and refreshes it from the backend.
///
/// Constructed explicitly and shared by reference; the only writer of the
/// state is [`BlogInfoStore::fetch_blog_info`].
pub struct BlogInfoStore {
    api: Arc<dyn BlogApi>,
    document: Arc<dyn Document>,
    state: RwLock<BlogInfo>,
    cache_buster: CacheBuster,
}

impl BlogInfoStore {
    /// Creates a store with empty name and title.
    pub fn new(api: Arc<dyn BlogApi>, document: Arc<dyn Document>) -> Self {
        Self {
            api,
            document,
            state: RwLock::new(BlogInfo::default()),
            cache_buster: CacheBuster::new(),
        }
    }

    /// Snapshot of the current state.
    pub fn blog_info(&self) -> BlogInfo {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Fetches the site metadata and replaces the state with it.
    ///
    /// On success the document title is set to the received `blogTitle`. Any
    /// failure is logged and swallowed, leaving the previous state in place.
    /// Concurrent calls are not sequenced: the last response to arrive wins.
    pub async fn fetch_blog_info(&self) {
        let t = self.cache_buster.next();

        match self.api.fetch_info(t).await {
            Ok(info) => {
                debug!(t, blog_name = %info.blog_name, "blog info fetched");
                let title = info.blog_title.clone();
                *self.state.write().unwrap_or_else(|e| e.into_inner()) = info;
                self.document.set_title(&title);
            }
            Err(e) => {
                error!(error = %e, "Fetch Blog Info Error");
            }
        }
    }
}
