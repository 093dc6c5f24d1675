//! Cache Entry Module
//!
//! Defines the stored unit: a key, an opaque payload and its write timestamp.

use serde::Serialize;

// == Cache Entry ==
/// A single cache entry.
///
/// The payload is never inspected by the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry<T> {
    /// Key the entry is stored under
    pub key: String,
    /// The stored payload
    pub data: T,
    /// Clock reading (milliseconds) taken when the entry was written
    pub inserted_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry stamped with `inserted_at`.
    pub fn new(key: impl Into<String>, data: T, inserted_at: u64) -> Self {
        Self {
            key: key.into(),
            data,
            inserted_at,
        }
    }

    // == Age ==
    /// Milliseconds elapsed between the write and `now_ms`.
    ///
    /// Saturates at zero if `now_ms` is earlier than the write.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still within `ttl_ms` at `now_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) < ttl_ms
    }

    // == Remaining ==
    /// Milliseconds left before the entry expires, 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now_ms))
    }
}
