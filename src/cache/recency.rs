//! Recency Order Module
//!
//! Tracks the iteration order of the cache store.

use std::collections::VecDeque;

// == Recency Order ==
/// Iteration order of the keys held by a cache.
///
/// Keys are stored in a VecDeque where:
/// - Front = first in iteration order (oldest insertion)
/// - Back = last in iteration order (newest insertion or latest promotion)
///
/// This order is nudged by reads but is never the eviction key; eviction
/// compares entry timestamps and only falls back to this order for ties.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecencyOrder {
    order: VecDeque<String>,
}

impl RecencyOrder {
    // == Constructor ==
    /// Creates a new empty order.
    pub(crate) fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Append ==
    /// Appends a key that is not yet tracked.
    pub(crate) fn append(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    // == Promote ==
    /// Moves a tracked key to the back of the order.
    ///
    /// Untracked keys are ignored.
    pub(crate) fn promote(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    // == Remove ==
    /// Removes a key from the order.
    pub(crate) fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == First ==
    /// Returns the key first in iteration order.
    pub(crate) fn first(&self) -> Option<&str> {
        self.order.front().map(String::as_str)
    }

    // == Iter ==
    /// Iterates keys front to back.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    // == Clear ==
    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }
}
