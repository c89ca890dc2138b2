//! Click entity representing a single recorded redirect.

use chrono::{DateTime, Utc};

/// A click recorded in the durable event log when a shortened link is resolved.
///
/// Immutable once created: records are appended by the click worker and never
/// updated or deleted. Client metadata is optional to handle missing headers
/// gracefully.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: String,
    /// Short code of the resolved link. Clicks for codes that no longer
    /// exist may remain in the log; the aggregator filters by membership.
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    /// Resolution latency measured on the redirect path, in milliseconds.
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_with_all_fields() {
        let now = Utc::now();
        let click = Click {
            id: "ev1".to_string(),
            code: "abc1234".to_string(),
            clicked_at: now,
            user_agent: Some("Mozilla/5.0".to_string()),
            referer: Some("https://news.ycombinator.com".to_string()),
            latency_ms: 0.42,
        };

        assert_eq!(click.code, "abc1234");
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert!(click.latency_ms < 1.0);
    }

    #[test]
    fn test_click_minimal_metadata() {
        let click = Click {
            id: "ev2".to_string(),
            code: "xyz".to_string(),
            clicked_at: Utc::now(),
            user_agent: None,
            referer: None,
            latency_ms: 0.0,
        };

        assert!(click.user_agent.is_none());
        assert!(click.referer.is_none());
    }
}
