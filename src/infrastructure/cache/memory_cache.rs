//! In-process read-through cache for redirect resolution.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use super::service::{CacheService, CacheStats};

/// Cache of `code -> destination URL`, storing only the resolved URL to keep
/// memory per entry minimal.
///
/// Counters are atomics so concurrent resolutions never lose an update; the
/// map sits behind a coarse `RwLock`. Entries are populated lazily on first
/// miss and never evicted (accepted demo-scale simplification; a bounded
/// implementation would replace this behind the same trait).
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
    requests: AtomicU64,
    hits: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, code: &str) -> Option<String> {
        self.requests.fetch_add(1, Ordering::Relaxed);

        let entries = self.entries.read().expect("cache lock poisoned");
        let cached = entries.get(code).cloned();

        if cached.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        cached
    }

    async fn set_url(&self, code: &str, long_url: &str) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(code.to_string(), long_url.to_string());
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            requests: self.requests.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
