//! Repository trait for stored user credentials.

use crate::domain::entities::StoredCredential;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user credential records.
///
/// Only the auth service talks to this repository; everything else sees
/// [`crate::domain::entities::UserProfile`] projections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new credential record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    async fn create(&self, credential: StoredCredential) -> Result<StoredCredential, AppError>;

    /// Finds a credential record by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredCredential>, AppError>;

    /// Finds a credential record by user id.
    async fn find_by_id(&self, user_id: &str) -> Result<Option<StoredCredential>, AppError>;
}
