//! Cache Statistics Module
//!
//! Counts lookup outcomes and capacity evictions.

use serde::Serialize;

// == Lookup Outcome ==
/// What a single lookup found.
///
/// Callers of `get` only ever see present or absent; the counters keep the
/// reason an entry was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupOutcome {
    /// A fresh entry was returned
    Hit,
    /// No entry under the key: never set, deleted or evicted
    Missing,
    /// An entry exists but its TTL has elapsed
    Expired,
}

// == Cache Stats ==
/// Cache counters. They are observational and never affect cache behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that returned an entry
    pub hits: u64,
    /// Lookups for keys with no entry
    pub misses: u64,
    /// Lookups that found only an expired entry
    pub expired: u64,
    /// Entries removed to stay within the maximum size
    pub evictions: u64,
    /// Entries physically held, expired ones included
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookups ==
    /// Total lookups recorded, whatever their outcome.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses + self.expired
    }

    // == Hit Rate ==
    /// Share of lookups that returned an entry, or 0.0 before any lookup.
    ///
    /// Expired lookups count against the rate like plain misses.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    // == Record Lookup ==
    /// Bumps the counter matching `outcome`.
    pub fn record_lookup(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Hit => self.hits += 1,
            LookupOutcome::Missing => self.misses += 1,
            LookupOutcome::Expired => self.expired += 1,
        }
    }

    // == Record Eviction ==
    /// Counts one capacity eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
