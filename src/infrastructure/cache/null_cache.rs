//! No-op cache implementation for testing or disabled caching.

use async_trait::async_trait;
use tracing::debug;

use super::service::{CacheService, CacheStats};

/// A cache implementation that stores nothing.
///
/// Every lookup is a miss, forcing resolution through the link store. Useful
/// in tests that exercise the store path and for running with caching
/// disabled. Requests are still counted so the hit rate reads as zero rather
/// than undefined.
#[derive(Default)]
pub struct NullCache {
    requests: std::sync::atomic::AtomicU64,
}

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self::default()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _code: &str) -> Option<String> {
        self.requests
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        None
    }

    async fn set_url(&self, _code: &str, _long_url: &str) {}

    fn stats(&self) -> CacheStats {
        CacheStats {
            requests: self.requests.load(std::sync::atomic::Ordering::Relaxed),
            hits: 0,
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
