//! Caching layer for route queries.
//!
//! A finalized router never changes, so a cached answer stays correct for
//! as long as the process runs. The TTL and capacity only bound memory.
//! Failed queries are not cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::router::{RouteInfo, RouterError, TransportRouter};

/// Cache key: (origin stop name, destination stop name).
type RouteKey = (String, String);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl CacheConfig {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self { ttl, max_capacity }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Memoised route answers.
pub struct RouteCache {
    routes: MokaCache<RouteKey, Arc<RouteInfo>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Answer a route query, using the cache if available.
    pub async fn get_route(
        &self,
        router: &TransportRouter,
        from: &str,
        to: &str,
    ) -> Result<Arc<RouteInfo>, RouterError> {
        let key = (from.to_string(), to.to_string());

        if let Some(cached) = self.routes.get(&key).await {
            trace!(from, to, "Route cache hit");
            return Ok(cached);
        }

        let route = Arc::new(router.get_route(from, to)?);
        self.routes.insert(key, route.clone()).await;

        Ok(route)
    }

    /// Number of cached answers (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
