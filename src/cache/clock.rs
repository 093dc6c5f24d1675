//! Clock Module
//!
//! Millisecond time sources used to stamp and age cache entries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

// == Clock Trait ==
/// A non-decreasing millisecond time source.
pub trait Clock {
    /// Returns the current reading in milliseconds.
    fn now_ms(&self) -> u64;
}

// == Monotonic Clock ==
/// Process-wide origin shared by every `MonotonicClock`.
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Clock backed by `Instant`, counting milliseconds since a process-wide
/// origin.
///
/// Every instance reads the same time base, so an entry stamped by one
/// cache ages the same way when checked by another. Wall-clock adjustments
/// never move it backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    pub fn new() -> Self {
        // Pin the origin no later than the first clock's creation
        EPOCH.get_or_init(Instant::now);
        Self
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        let elapsed = EPOCH.get_or_init(Instant::now).elapsed().as_millis();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }
}

// == Manual Clock ==
/// Clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and give
/// another to the cache.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Moves the clock forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Sets the reading. Values below the current reading are ignored.
    pub fn set(&self, ms: u64) {
        self.now.fetch_max(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
