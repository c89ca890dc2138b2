//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

use crate::domain::entities::Click;

/// An in-flight click event awaiting ingestion.
///
/// Created by the redirect resolver and passed to the background worker via
/// a channel, decoupling the redirect response from click bookkeeping. The
/// queue owns an event transiently; on drain the worker transfers it into
/// the durable event log as a [`Click`].
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub id: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub latency_ms: f64,
}

impl ClickEvent {
    /// Creates a new click event with a fresh id and the current timestamp.
    pub fn new(
        code: String,
        user_agent: Option<&str>,
        referer: Option<&str>,
        latency_ms: f64,
    ) -> Self {
        Self {
            id: crate::utils::idgen::generate_id(),
            code,
            timestamp: Utc::now(),
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
            latency_ms,
        }
    }

    /// Converts into the durable log record.
    pub fn into_click(self) -> Click {
        Click {
            id: self.id,
            code: self.code,
            clicked_at: self.timestamp,
            user_agent: self.user_agent,
            referer: self.referer,
            latency_ms: self.latency_ms,
        }
    }
}
