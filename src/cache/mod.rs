//! Cache Module
//!
//! Provides a bounded in-memory cache with TTL expiration and capacity eviction.

mod cache_trait;
mod clock;
mod entry;
mod recency;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use cache_trait::Cache;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entry::CacheEntry;
pub use shared::SharedCache;
pub use stats::{CacheStats, LookupOutcome};
pub use store::BoundedCache;

pub(crate) use recency::RecencyOrder;
