//! DTOs for the per-owner metrics endpoint.

use serde::Serialize;

use crate::application::services::OwnerMetrics;

/// Per-owner analytics rollup.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub total_links: usize,
    pub total_clicks: usize,
    pub clicks_today: usize,
    pub avg_latency_ms: f64,
    /// Global cache hit rate, 0..1. Shared across all owners.
    pub cache_hit_rate: f64,
}

impl From<OwnerMetrics> for MetricsResponse {
    fn from(m: OwnerMetrics) -> Self {
        Self {
            total_links: m.total_links,
            total_clicks: m.total_clicks,
            clicks_today: m.clicks_today,
            avg_latency_ms: m.avg_latency_ms,
            cache_hit_rate: m.cache_hit_rate,
        }
    }
}
