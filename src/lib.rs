//! Bounded Cache - A time-aware in-memory cache
//!
//! Stores opaque payloads under string keys, expiring them after a TTL and
//! evicting the oldest write once a maximum size is exceeded.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedCache, Cache, CacheEntry, CacheStats, SharedCache};
pub use config::CacheConfig;
pub use error::ConfigError;
