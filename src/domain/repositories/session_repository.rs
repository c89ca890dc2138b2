//! Repository trait for session tokens.

use crate::error::AppError;
use async_trait::async_trait;

/// Opaque bearer-token session table: `token -> user_id`.
///
/// Owned by the auth layer; the rest of the core consumes it read-only
/// through [`SessionRepository::resolve`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Registers a session token for a user.
    async fn insert(&self, token: &str, user_id: &str) -> Result<(), AppError>;

    /// Resolves a token to the owning user id, if the session exists.
    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError>;
}
