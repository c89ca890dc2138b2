//! In-memory append-only click event log.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::Click;
use crate::domain::repositories::EventLog;
use crate::error::AppError;

/// Append-only log of click records, in arrival order.
///
/// Single-writer by convention (only the click worker appends); readers
/// take cheap snapshots under the read lock.
#[derive(Default)]
pub struct MemoryEventLog {
    events: RwLock<Vec<Click>>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventLog for MemoryEventLog {
    async fn append(&self, click: Click) -> Result<(), AppError> {
        self.events
            .write()
            .expect("event log lock poisoned")
            .push(click);
        Ok(())
    }

    async fn filter_by_codes(&self, codes: &HashSet<String>) -> Result<Vec<Click>, AppError> {
        let events = self.events.read().expect("event log lock poisoned");
        Ok(events
            .iter()
            .filter(|c| codes.contains(&c.code))
            .cloned()
            .collect())
    }

    async fn len(&self) -> Result<usize, AppError> {
        Ok(self.events.read().expect("event log lock poisoned").len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn click(code: &str) -> Click {
        Click {
            id: crate::utils::idgen::generate_id(),
            code: code.to_string(),
            clicked_at: Utc::now(),
            user_agent: None,
            referer: None,
            latency_ms: 0.5,
        }
    }

    #[tokio::test]
    async fn test_append_and_len() {
        let log = MemoryEventLog::new();
        assert_eq!(log.len().await.unwrap(), 0);

        log.append(click("a")).await.unwrap();
        log.append(click("b")).await.unwrap();
        assert_eq!(log.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_filter_by_membership() {
        let log = MemoryEventLog::new();
        log.append(click("a")).await.unwrap();
        log.append(click("b")).await.unwrap();
        log.append(click("a")).await.unwrap();

        let codes: HashSet<String> = ["a".to_string()].into();
        let filtered = log.filter_by_codes(&codes).await.unwrap();

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.code == "a"));
    }

    #[tokio::test]
    async fn test_filter_preserves_append_order() {
        let log = MemoryEventLog::new();
        for i in 0..5 {
            let mut c = click("a");
            c.latency_ms = i as f64;
            log.append(c).await.unwrap();
        }

        let codes: HashSet<String> = ["a".to_string()].into();
        let filtered = log.filter_by_codes(&codes).await.unwrap();
        let latencies: Vec<f64> = filtered.iter().map(|c| c.latency_ms).collect();
        assert_eq!(latencies, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
