//! Cache Trait Module
//!
//! The narrow contract a consumer needs from a cache.

use crate::cache::{BoundedCache, CacheEntry, Clock};

/// A keyed store of opaque payloads.
///
/// Absent covers every reason a key has no usable entry: never set,
/// expired, deleted or evicted.
pub trait Cache<T> {
    /// Returns the entry under `key` if it is present and still valid.
    ///
    /// Takes `&mut self` because a lookup may reorder the store.
    fn get(&mut self, key: &str) -> Option<&CacheEntry<T>>;

    /// Stores `data` under `key`, replacing any previous entry.
    fn set(&mut self, key: String, data: T);

    /// Removes the entry under `key`, if any.
    fn delete(&mut self, key: &str);

    /// Removes every entry.
    fn clear(&mut self);

    /// Checks whether `entry` is still fresh by this cache's rules.
    fn is_valid(&self, entry: &CacheEntry<T>) -> bool;

    /// Returns the number of entries physically held.
    fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, C: Clock> Cache<T> for BoundedCache<T, C> {
    fn get(&mut self, key: &str) -> Option<&CacheEntry<T>> {
        BoundedCache::get(self, key)
    }

    fn set(&mut self, key: String, data: T) {
        BoundedCache::set(self, key, data);
    }

    fn delete(&mut self, key: &str) {
        BoundedCache::delete(self, key);
    }

    fn clear(&mut self) {
        BoundedCache::clear(self);
    }

    fn is_valid(&self, entry: &CacheEntry<T>) -> bool {
        BoundedCache::is_valid(self, entry)
    }

    fn len(&self) -> usize {
        BoundedCache::len(self)
    }
}
