//! Redirect resolution with read-through caching and click enqueue.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// The redirect hot path: cache lookup, store fallback, click enqueue.
///
/// Never waits on the click worker; enqueueing is `try_send` and a full or
/// closed queue drops the event without affecting the redirect response.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
    cache: Arc<dyn CacheService>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl<L: LinkRepository> RedirectService<L> {
    /// Creates a new redirect service.
    pub fn new(
        link_repository: Arc<L>,
        cache: Arc<dyn CacheService>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            link_repository,
            cache,
            click_sender,
        }
    }

    /// Resolves a short code to its destination URL.
    ///
    /// Read-through: a cache hit returns immediately; on miss the link store
    /// is consulted and, when the code exists, the cache is populated before
    /// returning. Negative results are never cached, so an absent code stays
    /// a store lookup until it is created.
    ///
    /// Every successful resolution records a [`ClickEvent`] carrying the
    /// measured resolution latency and client metadata, fired into the
    /// ingestion queue without blocking.
    ///
    /// Returns `Ok(None)` for unknown codes; callers map that to not-found.
    pub async fn resolve(
        &self,
        code: &str,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let start = Instant::now();

        let long_url = match self.cache.get_url(code).await {
            Some(cached_url) => {
                debug!(code, "cache hit");
                cached_url
            }
            None => {
                debug!(code, "cache miss");
                match self.link_repository.find_by_code(code).await? {
                    Some(link) => {
                        self.cache.set_url(code, &link.long_url).await;
                        link.long_url
                    }
                    None => return Ok(None),
                }
            }
        };

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        let event = ClickEvent::new(code.to_string(), user_agent, referer, latency_ms);

        // Fire-and-forget: the redirect must not fail because analytics lag.
        match self.click_sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!(code, "click queue full, dropping event"),
            Err(TrySendError::Closed(_)) => debug!(code, "click queue closed, dropping event"),
        }

        Ok(Some(long_url))
    }
}
