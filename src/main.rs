//! Bounded Cache demo
//!
//! Caches query results in front of a slow lookup, the way a query client
//! would, and reports what the cache saw.

use std::time::Duration;

use anyhow::Context;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::{CacheConfig, SharedCache};

/// Entry point for the cache demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the same query twice through a cache-aside lookup
/// 4. Log the final cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: ttl={}ms, max_size={}",
        config.ttl_ms(),
        config.max_size()
    );

    let cache: SharedCache<Value> = SharedCache::new(config);
    let key = r#"{"key":["characters"],"variables":{"page":2}}"#;

    for attempt in 1..=2 {
        let characters = cache
            .get_or_fetch(key, || load_characters(2))
            .await
            .context("query failed")?;
        info!(
            "Attempt {}: {} characters on page {}",
            attempt,
            characters["results"].as_array().map_or(0, Vec::len),
            characters["info"]["page"]
        );
    }

    let stats = cache.stats().await;
    info!(
        "Cache stats: hits={}, misses={}, expired={}, evictions={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.expired,
        stats.evictions,
        stats.total_entries,
        stats.hit_rate()
    );

    Ok(())
}

/// Stands in for a remote query: slow, and returns a JSON document.
async fn load_characters(page: u64) -> anyhow::Result<Value> {
    info!("Cache miss, loading page {}", page);
    tokio::time::sleep(Duration::from_millis(200)).await;

    Ok(json!({
        "info": { "page": page, "count": 2 },
        "results": [
            { "id": "1", "name": "Rick Sanchez", "status": "Alive" },
            { "id": "2", "name": "Morty Smith", "status": "Alive" }
        ]
    }))
}
