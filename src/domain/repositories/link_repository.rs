//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The link store exclusively owns `Link` records: handlers only read and
/// create, while the background click worker is the sole caller of
/// [`LinkRepository::increment_clicks`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code. No side effects.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links owned by a user, ordered by `created_at` descending.
    async fn list_by_owner(&self, owner_user_id: &str) -> Result<Vec<Link>, AppError>;

    /// Atomically increments the click count for a code.
    ///
    /// Returns `Ok(false)` when the code does not exist. Callers on the
    /// ingestion path treat that as a dropped click, never as a failure.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;
}
