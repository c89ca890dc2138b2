//! Repository trait for the append-only click event log.

use std::collections::HashSet;

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, append-only log of recorded clicks.
///
/// The background click worker is the sole appender; the metrics aggregator
/// reads. Records are never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryEventLog`] - in-memory log
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Appends a click record to the log.
    async fn append(&self, click: Click) -> Result<(), AppError>;

    /// Returns a snapshot of all records whose code is in `codes`,
    /// in append order.
    async fn filter_by_codes(&self, codes: &HashSet<String>) -> Result<Vec<Click>, AppError>;

    /// Total number of records in the log, across all codes.
    async fn len(&self) -> Result<usize, AppError>;
}
