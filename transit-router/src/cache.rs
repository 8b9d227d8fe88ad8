//! Caching layer for city-to-city route queries.
//!
//! The graph never changes after startup, so a query's answer depends only on
//! its parameters. The TTL just bounds how long rarely-repeated queries stay
//! resident.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{CityId, ClockTime};
use crate::planner::{Criterion, Route};

/// Cache key: (origin, destination, criterion, start time, limit).
pub type QueryKey = (CityId, CityId, Criterion, ClockTime, usize);

/// Cached ranked routes.
pub type QueryEntry = Arc<Vec<Route>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache of ranked routes per query.
pub struct RouteCache {
    queries: MokaCache<QueryKey, QueryEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let queries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { queries }
    }

    /// Get a cached result.
    pub async fn get(&self, key: &QueryKey) -> Option<QueryEntry> {
        self.queries.get(key).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, key: QueryKey, entry: QueryEntry) {
        self.queries.insert(key, entry).await;
    }

    /// Get a cached result, computing and storing it on a miss.
    ///
    /// Errors from `compute` are returned and nothing is cached.
    pub async fn get_or_try_insert<F, Fut, E>(
        &self,
        key: QueryKey,
        compute: F,
    ) -> Result<QueryEntry, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<Route>, E>>,
    {
        if let Some(cached) = self.get(&key).await {
            return Ok(cached);
        }

        let entry = Arc::new(compute().await?);
        self.insert(key, entry.clone()).await;
        Ok(entry)
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.queries.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key(limit: usize) -> QueryKey {
        (
            CityId::parse("G_0_0").unwrap(),
            CityId::parse("G_0_1").unwrap(),
            Criterion::Time,
            ClockTime::from_hm(8, 0).unwrap(),
            limit,
        )
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn cache_creation() {
        let cache = RouteCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache = RouteCache::new(&CacheConfig::default());
        assert!(cache.get(&key(3)).await.is_none());

        cache.insert(key(3), Arc::new(Vec::new())).await;
        assert!(cache.get(&key(3)).await.is_some());
        assert!(cache.get(&key(4)).await.is_none());
    }

    #[tokio::test]
    async fn computes_once_per_key() {
        let cache = RouteCache::new(&CacheConfig::default());
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let entry = cache
                .get_or_try_insert(key(5), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(Vec::new())
                })
                .await
                .unwrap();
            assert!(entry.is_empty());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache = RouteCache::new(&CacheConfig::default());

        let result = cache
            .get_or_try_insert(key(5), || async { Err::<Vec<Route>, _>("boom") })
            .await;
        assert_eq!(result.unwrap_err(), "boom");
        assert!(cache.get(&key(5)).await.is_none());
    }
}
