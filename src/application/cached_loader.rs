//! Read-through caching of note source results.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Loads values through the cache.
///
/// On a miss the fill lock is taken and the cache checked again before the
/// loader runs, so concurrent misses on the same key trigger a single
/// upstream fetch. Values are stored as JSON; the cache backend handles
/// compression. Cache failures are logged and treated as misses.
pub struct CachedLoader {
    cache: Arc<dyn CacheService>,
    fill_lock: Mutex<()>,
    ttl_seconds: u64,
}

impl CachedLoader {
    pub fn new(cache: Arc<dyn CacheService>, ttl_seconds: u64) -> Self {
        Self {
            cache,
            fill_lock: Mutex::new(()),
            ttl_seconds,
        }
    }

    pub async fn get_or_load<T, F, Fut>(&self, key: &str, load: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if let Some(value) = self.lookup(key).await {
            return Ok(value);
        }

        let _guard = self.fill_lock.lock().await;

        if let Some(value) = self.lookup(key).await {
            return Ok(value);
        }

        info!("Cache miss, fetching from source: {}", key);
        metrics::counter!("blog_cache_misses_total").increment(1);

        let value = load().await?;

        match serde_json::to_vec(&value) {
            Ok(bytes) => {
                if let Err(e) = self.cache.set(key, &bytes, Some(self.ttl_seconds)).await {
                    warn!("Failed to cache data for {}: {}", key, e);
                }
            }
            Err(e) => warn!("Failed to serialize {} for caching: {}", key, e),
        }

        Ok(value)
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => {
                    debug!("Serving {} from cache", key);
                    metrics::counter!("blog_cache_hits_total").increment(1);
                    Some(value)
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Cache lookup failed for {}: {}", key, e);
                None
            }
        }
    }
}
