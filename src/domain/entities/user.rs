//! User types: stored credential vs public-facing profile.
//!
//! Two deliberately separate types with a one-way projection. The stored
//! record carries the password hash and never crosses an API boundary; the
//! profile is what handlers and responses see.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Internal user record including the credential hash.
///
/// Only the auth service and user repository handle this type.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl StoredCredential {
    /// Projects to the public profile, discarding the credential hash.
    ///
    /// This is the only path from stored record to API-visible data; there
    /// is no conversion in the other direction.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public-facing user profile, safe to serialize into responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
