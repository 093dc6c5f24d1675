//! Integration Tests for the public cache API
//!
//! Exercises the cache the way a consuming client does: opaque keys,
//! structured payloads, explicit construction.

use bounded_cache::cache::{BoundedCache, ManualClock, SharedCache};
use bounded_cache::{Cache, CacheConfig, ConfigError};
use serde_json::{json, Value};

// == Helper Functions ==

fn test_cache(config: CacheConfig) -> (BoundedCache<Value, ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let cache = BoundedCache::with_clock(config, clock.clone());
    (cache, clock)
}

// == Basic Operations ==

#[test]
fn test_set_and_get_json_payload() {
    let (mut cache, _clock) = test_cache(CacheConfig::new(1_000, 3));
    let data = json!({ "foo": "bar" });

    cache.set("key", data.clone());
    let cached = cache.get("key");

    assert!(cached.is_some());
    assert_eq!(cached.unwrap().data, data);
}

#[test]
fn test_entry_expires_after_ttl() {
    let (mut cache, clock) = test_cache(CacheConfig::new(1_000, 3));

    for i in 0..3 {
        cache.set(format!("key_{}", i), json!({ "foo": format!("bar_{}", i) }));
    }

    clock.advance(1_000);

    assert!(cache.get("key_0").is_none());
    assert!(cache.get("key_1").is_none());
    assert!(cache.get("key_2").is_none());
}

#[test]
fn test_evicts_when_size_exceeds_max_size() {
    let (mut cache, clock) = test_cache(CacheConfig::new(1_000, 3));

    // Only the last three should remain after eviction
    for i in 0..5 {
        cache.set(format!("key_{}", i), json!({ "foo": format!("bar_{}", i) }));
        clock.advance(1);
    }

    assert!(cache.get("key_0").is_none());
    assert!(cache.get("key_1").is_none());
    assert!(cache.get("key_2").is_some());
    assert!(cache.get("key_3").is_some());
    assert!(cache.get("key_4").is_some());
}

#[test]
fn test_delete_specific_item() {
    let (mut cache, _clock) = test_cache(CacheConfig::new(1_000, 3));

    cache.set("key", json!({ "foo": "bar" }));
    cache.set("other", json!({ "foo": "baz" }));
    cache.delete("key");

    assert!(cache.get("key").is_none());
    assert_eq!(cache.get("other").unwrap().data["foo"], "baz");
}

#[test]
fn test_clear_entire_cache() {
    let (mut cache, _clock) = test_cache(CacheConfig::new(1_000, 3));

    cache.set("key_1", json!({ "foo": "bar" }));
    cache.set("key_2", json!({ "foo": "bar" }));
    cache.clear();

    assert!(cache.get("key_1").is_none());
    assert!(cache.get("key_2").is_none());
    assert_eq!(cache.len(), 0);
}

// == Ordering ==

#[test]
fn test_iteration_order_follows_reads_but_eviction_does_not() {
    let (mut cache, clock) = test_cache(CacheConfig::new(10_000, 3));

    cache.set("a", json!(1));
    clock.advance(1);
    cache.set("b", json!(2));
    clock.advance(1);
    cache.set("c", json!(3));
    clock.advance(1);

    // "a" is first, so reading it leaves it in place; "b" moves to the back
    cache.get("a");
    cache.get("b");
    let order: Vec<&str> = cache.keys().collect();
    assert_eq!(order, vec!["a", "c", "b"]);

    // "a" has the oldest write and goes first despite the read
    cache.set("d", json!(4));
    let order: Vec<&str> = cache.keys().collect();
    assert_eq!(order, vec!["c", "b", "d"]);

    // Then "b", even though "c" precedes it in iteration order
    cache.set("e", json!(5));
    let order: Vec<&str> = cache.keys().collect();
    assert_eq!(order, vec!["c", "d", "e"]);
}

#[test]
fn test_iter_includes_expired_entries() {
    let (mut cache, clock) = test_cache(CacheConfig::new(100, 3));

    cache.set("old", json!("stale"));
    clock.advance(100);
    cache.set("new", json!("fresh"));

    let valid: Vec<&str> = cache
        .iter()
        .filter(|entry| cache.is_valid(entry))
        .map(|entry| entry.key.as_str())
        .collect();

    assert_eq!(cache.iter().count(), 2);
    assert_eq!(valid, vec!["new"]);
}

// == Cache Contract ==

/// Consumer written against the trait alone, the way a query client would be
fn lookup_or_store<S: Cache<Value>>(cache: &mut S, key: &str, fresh: Value) -> Value {
    if let Some(entry) = cache.get(key) {
        return entry.data.clone();
    }
    cache.set(key.to_string(), fresh.clone());
    fresh
}

#[test]
fn test_consumer_through_cache_trait() {
    let (mut cache, clock) = test_cache(CacheConfig::new(1_000, 3));

    assert_eq!(lookup_or_store(&mut cache, "q", json!(1)), json!(1));
    assert_eq!(lookup_or_store(&mut cache, "q", json!(2)), json!(1));

    clock.advance(1_000);
    assert_eq!(lookup_or_store(&mut cache, "q", json!(3)), json!(3));

    Cache::delete(&mut cache, "q");
    assert!(Cache::is_empty(&cache));
}

// == Configuration ==

#[test]
fn test_config_from_json_drives_cache() {
    let config = CacheConfig::from_json(r#"{"ttl": 1000, "maxSize": 3}"#).unwrap();
    let cache: BoundedCache<Value> = BoundedCache::new(config);

    assert_eq!(cache.ttl_ms(), 1_000);
    assert_eq!(cache.max_size(), 3);
}

#[test]
fn test_config_from_json_rejects_garbage() {
    let result = CacheConfig::from_json("not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// == Shared Access ==

#[tokio::test]
async fn test_shared_cache_across_tasks() {
    let cache: SharedCache<Value> = SharedCache::new(CacheConfig::new(60_000, 100));

    let writer = {
        let cache = cache.clone();
        tokio::spawn(async move {
            cache.set("query", json!({ "characters": [] })).await;
        })
    };
    writer.await.unwrap();

    let entry = cache.get("query").await.unwrap();
    assert_eq!(entry.data, json!({ "characters": [] }));
    assert!(cache.is_valid(&entry).await);
}

#[tokio::test]
async fn test_get_or_fetch_only_fetches_once() {
    let cache: SharedCache<Value> = SharedCache::new(CacheConfig::default());
    let mut calls = 0;

    for _ in 0..3 {
        let result: Result<Value, String> = cache
            .get_or_fetch("query", || {
                calls += 1;
                async { Ok(json!({ "data": 1 })) }
            })
            .await;
        assert_eq!(result.unwrap()["data"], 1);
    }

    assert_eq!(calls, 1);
    assert_eq!(cache.stats().await.hits, 2);
}
