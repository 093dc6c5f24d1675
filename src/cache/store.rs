//! Cache Store Module
//!
//! Main cache engine combining keyed storage, an iteration order, TTL
//! expiration and capacity eviction.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, LookupOutcome, MonotonicClock, RecencyOrder};
use crate::config::CacheConfig;

// == Bounded Cache ==
/// In-memory cache bounded by a TTL and a maximum entry count.
///
/// Two orderings are kept apart:
/// - `inserted_at` on each entry decides which entry capacity eviction removes
/// - `order` is the iteration order, nudged on reads, used only to break
///   eviction ties
///
/// Reads never change an entry's timestamp, so they do not protect it from
/// eviction: this is oldest-write eviction, not LRU.
///
/// Expired entries are never swept; they read as absent and stay in the
/// store until overwritten, deleted, cleared or evicted.
#[derive(Debug)]
pub struct BoundedCache<T, C = MonotonicClock> {
    /// Key-entry storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Iteration order of `entries`
    order: RecencyOrder,
    /// Lookup and eviction counters
    stats: CacheStats,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
    /// Maximum number of entries allowed
    max_size: usize,
    clock: C,
}

impl<T> BoundedCache<T, MonotonicClock> {
    // == Constructor ==
    /// Creates a cache reading time from a fresh monotonic clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<T> Default for BoundedCache<T, MonotonicClock> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<T, C: Clock> BoundedCache<T, C> {
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            order: RecencyOrder::new(),
            stats: CacheStats::new(),
            ttl_ms: config.ttl_ms(),
            max_size: config.max_size(),
            clock,
        }
    }

    // == Set ==
    /// Stores `data` under `key`, stamped with the current time.
    ///
    /// Overwriting an existing key replaces its payload and resets its
    /// timestamp but keeps its position in iteration order. If the write
    /// grows the store past `max_size`, the entry with the oldest timestamp
    /// is evicted.
    pub fn set(&mut self, key: impl Into<String>, data: T) {
        let now = self.clock.now_ms();

        match self.entries.entry(key.into()) {
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.data = data;
                entry.inserted_at = now;
            }
            Entry::Vacant(slot) => {
                self.order.append(slot.key());
                let entry = CacheEntry::new(slot.key().clone(), data, now);
                slot.insert(entry);
            }
        }

        self.evict_if_over_capacity();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the entry stored under `key`.
    ///
    /// Returns `None` when the key is missing or its entry has expired. An
    /// expired entry is left in the store. A hit moves the entry to the back
    /// of iteration order unless it is the only entry or already first.
    pub fn get(&mut self, key: &str) -> Option<&CacheEntry<T>> {
        let now = self.clock.now_ms();
        let outcome = match self.entries.get(key) {
            None => LookupOutcome::Missing,
            Some(entry) if entry.is_fresh(now, self.ttl_ms) => LookupOutcome::Hit,
            Some(_) => LookupOutcome::Expired,
        };

        self.stats.record_lookup(outcome);
        if outcome != LookupOutcome::Hit {
            return None;
        }

        self.reposition(key);
        self.entries.get(key)
    }

    // == Delete ==
    /// Removes the entry stored under `key`, if any.
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
        debug!("Cache cleared: removed {} entries", removed);
    }

    // == Is Valid ==
    /// Checks whether `entry` is still within the TTL.
    ///
    /// Works on any entry, including clones taken out of the cache earlier.
    pub fn is_valid(&self, entry: &CacheEntry<T>) -> bool {
        entry.is_fresh(self.clock.now_ms(), self.ttl_ms)
    }

    // == Iteration ==
    /// Iterates entries in iteration order, expired ones included.
    pub fn iter(&self) -> impl Iterator<Item = &CacheEntry<T>> + '_ {
        self.order.iter().filter_map(move |key| self.entries.get(key))
    }

    /// Iterates keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of entries physically held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured entry lifetime in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Configured maximum entry count.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // Structural equality with the first entry reduces to key equality,
    // since keys are unique and part of every entry.
    fn reposition(&mut self, key: &str) {
        if self.entries.len() == 1 || self.order.first() == Some(key) {
            return;
        }
        self.order.promote(key);
    }

    // A set grows the store by at most one entry, so one eviction suffices.
    fn evict_if_over_capacity(&mut self) {
        if self.entries.len() <= self.max_size {
            return;
        }

        // min_by_key keeps the first of equal minimums, so ties go to the
        // entry earliest in iteration order.
        let oldest = self
            .iter()
            .min_by_key(|entry| entry.inserted_at)
            .map(|entry| entry.key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.order.remove(&key);
            self.stats.record_eviction();
            debug!(
                "Evicted key '{}' to stay within max size {}",
                key, self.max_size
            );
        }
    }
}
