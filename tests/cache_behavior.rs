mod common;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use linkpulse::application::services::RedirectService;
use linkpulse::infrastructure::cache::{CacheService, MemoryCache};
use linkpulse::infrastructure::persistence::MemoryLinkRepository;

fn resolver(
    repo: Arc<MemoryLinkRepository>,
    cache: Arc<MemoryCache>,
) -> (
    RedirectService<MemoryLinkRepository>,
    mpsc::Receiver<linkpulse::domain::click_event::ClickEvent>,
) {
    let (tx, rx) = mpsc::channel(1024);
    (
        RedirectService::new(repo, cache as Arc<dyn CacheService>, tx),
        rx,
    )
}

#[tokio::test]
async fn test_hit_rate_is_n_minus_one_over_n() {
    let repo = Arc::new(MemoryLinkRepository::new());
    common::seed_link(&repo, "abc1234", "https://example.com/", "u1", Utc::now());
    let cache = Arc::new(MemoryCache::new());
    let (service, _rx) = resolver(repo, cache.clone());

    const N: u64 = 10;
    for _ in 0..N {
        let resolved = service.resolve("abc1234", None, None).await.unwrap();
        assert!(resolved.is_some());
    }

    // First resolution misses, the rest hit.
    let expected = (N - 1) as f64 / N as f64;
    assert!((cache.hit_rate() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_absent_code_counts_request_but_never_caches() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let cache = Arc::new(MemoryCache::new());
    let (service, _rx) = resolver(repo, cache.clone());

    for _ in 0..3 {
        assert!(service.resolve("missing", None, None).await.unwrap().is_none());
    }

    let stats = cache.stats();
    assert_eq!(stats.requests, 3);
    assert_eq!(stats.hits, 0);
    assert_eq!(cache.hit_rate(), 0.0);
}

#[tokio::test]
async fn test_concurrent_resolutions_count_every_request() {
    let repo = Arc::new(MemoryLinkRepository::new());
    common::seed_link(&repo, "shared1", "https://example.com/", "u1", Utc::now());
    let cache = Arc::new(MemoryCache::new());
    let (service, _rx) = resolver(repo, cache.clone());
    let service = Arc::new(service);

    const CALLS: usize = 200;
    let mut handles = Vec::with_capacity(CALLS);
    for i in 0..CALLS {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            if i % 4 == 0 {
                service.resolve("absent9", None, None).await.unwrap();
            } else {
                service.resolve("shared1", None, None).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // No lost counter updates under contention.
    assert_eq!(cache.stats().requests, CALLS as u64);
}
