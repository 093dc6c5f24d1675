//! Shared Cache Module
//!
//! Lock-guarded handle for using one cache from many tasks.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{BoundedCache, Cache, CacheEntry, CacheStats, Clock};
use crate::config::CacheConfig;

/// Cloneable handle to a cache shared between tasks.
///
/// The whole store sits behind a single mutex: eviction scans every entry
/// and lookups reorder the store, so every operation needs exclusive access.
/// Any [`Cache`] implementation can be shared; `BoundedCache` is the default.
#[derive(Debug)]
pub struct SharedCache<T, S = BoundedCache<T>> {
    inner: Arc<Mutex<S>>,
    _data: PhantomData<fn() -> T>,
}

impl<T, S> Clone for SharedCache<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _data: PhantomData,
        }
    }
}

impl<T> SharedCache<T, BoundedCache<T>> {
    /// Creates a shared cache reading time from a monotonic clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::from_cache(BoundedCache::new(config))
    }
}

impl<T, S: Cache<T>> SharedCache<T, S> {
    /// Wraps an existing cache.
    pub fn from_cache(cache: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
            _data: PhantomData,
        }
    }

    pub async fn set(&self, key: impl Into<String>, data: T) {
        self.inner.lock().await.set(key.into(), data);
    }

    /// Returns a copy of the entry stored under `key`, if present and fresh.
    pub async fn get(&self, key: &str) -> Option<CacheEntry<T>>
    where
        T: Clone,
    {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn delete(&self, key: &str) {
        self.inner.lock().await.delete(key);
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn is_valid(&self, entry: &CacheEntry<T>) -> bool {
        self.inner.lock().await.is_valid(entry)
    }

    /// Returns the cached payload for `key`, or runs `fetch` and caches its
    /// result.
    ///
    /// The lock is not held while `fetch` runs, so concurrent callers
    /// missing on the same key may each fetch; the last write wins. Errors
    /// from `fetch` are returned as-is and nothing is cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        T: Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(entry) = self.get(key).await {
            return Ok(entry.data);
        }

        let data = fetch().await?;
        self.set(key, data.clone()).await;
        Ok(data)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

impl<T, C: Clock> SharedCache<T, BoundedCache<T, C>> {
    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }
}
