//! Per-owner analytics rollups.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::repositories::{EventLog, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Aggregated analytics for one link owner.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerMetrics {
    pub total_links: usize,
    pub total_clicks: usize,
    pub clicks_today: usize,
    /// Mean resolution latency across the owner's recorded clicks, in
    /// milliseconds. Zero when no clicks exist.
    pub avg_latency_ms: f64,
    /// Global cache hit rate as a 0..1 fraction. The cache is shared, so
    /// this is deliberately not owner-scoped.
    pub cache_hit_rate: f64,
}

/// Computes per-owner rollups by folding over the link store and event log.
///
/// A pure read: nothing is mutated and nothing is cached, the aggregate is
/// recomputed on every call.
pub struct MetricsService<L: LinkRepository, E: EventLog> {
    link_repository: Arc<L>,
    event_log: Arc<E>,
    cache: Arc<dyn CacheService>,
}

impl<L: LinkRepository, E: EventLog> MetricsService<L, E> {
    /// Creates a new metrics service.
    pub fn new(link_repository: Arc<L>, event_log: Arc<E>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            link_repository,
            event_log,
            cache,
        }
    }

    /// Computes the rollup for `owner_user_id`.
    ///
    /// Counts reflect the events the worker has applied so far; clicks still
    /// sitting in the queue are not included (eventual consistency).
    pub async fn compute(&self, owner_user_id: &str) -> Result<OwnerMetrics, AppError> {
        let links = self.link_repository.list_by_owner(owner_user_id).await?;

        let codes: HashSet<String> = links.iter().map(|l| l.code.clone()).collect();
        let events = self.event_log.filter_by_codes(&codes).await?;

        let today = Utc::now().date_naive();
        let clicks_today = events
            .iter()
            .filter(|e| e.clicked_at.date_naive() == today)
            .count();

        let avg_latency_ms = if events.is_empty() {
            0.0
        } else {
            events.iter().map(|e| e.latency_ms).sum::<f64>() / events.len() as f64
        };

        Ok(OwnerMetrics {
            total_links: links.len(),
            total_clicks: events.len(),
            clicks_today,
            avg_latency_ms,
            cache_hit_rate: self.cache.hit_rate(),
        })
    }
}
