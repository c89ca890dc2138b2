//! Cache service trait and counter types.

use async_trait::async_trait;

/// Point-in-time snapshot of the cache counters.
///
/// `requests` counts every lookup, including ones for codes that exist
/// nowhere; `hits` only lookups answered from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub requests: u64,
    pub hits: u64,
}

impl CacheStats {
    /// hits / requests, `0.0` before the first request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.requests as f64
        }
    }
}

/// Trait for caching short code to URL mappings.
///
/// Implementations must be safe under concurrent resolution: many
/// simultaneous lookups must not corrupt the hit/request counters or leave
/// the mapping inconsistent.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process map with atomic counters
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the destination URL for a short code.
    ///
    /// Every call counts as a request; a `Some` return also counts as a hit.
    async fn get_url(&self, code: &str) -> Option<String>;

    /// Stores a mapping after a backing-store hit.
    ///
    /// Callers never cache negative results; an absent code stays absent.
    async fn set_url(&self, code: &str, long_url: &str);

    /// Snapshot of the request/hit counters.
    fn stats(&self) -> CacheStats;

    /// Global cache hit rate as a 0..1 fraction.
    fn hit_rate(&self) -> f64 {
        self.stats().hit_rate()
    }

    /// Whether the cache backend is operational. Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
