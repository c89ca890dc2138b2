//! Authentication service: signup, login, and session token resolution.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{StoredCredential, UserProfile};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::idgen::{generate_id, generate_session_token};

type HmacSha256 = Hmac<Sha256>;

/// Service owning the user credential store and the session table.
///
/// Passwords are hashed with HMAC-SHA256 keyed by `signing_secret` before
/// storage; plaintext never leaves this service. Session tokens are opaque
/// random bearer credentials resolved to a user id on every protected call.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    signing_secret: String,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Creates a new authentication service.
    pub fn new(users: Arc<U>, sessions: Arc<S>, signing_secret: String) -> Self {
        Self {
            users,
            sessions,
            signing_secret,
        }
    }

    /// Hashes a password with HMAC-SHA256 under the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_password(&self, password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Registers a new user and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserProfile, String), AppError> {
        let credential = StoredCredential {
            id: generate_id(),
            email: email.to_string(),
            password_hash: self.hash_password(password),
            created_at: Utc::now(),
        };

        let stored = self.users.create(credential).await?;
        let token = self.open_session(&stored.id).await?;

        Ok((stored.to_profile(), token))
    }

    /// Verifies credentials and opens a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on unknown email or wrong
    /// password, without revealing which one was wrong.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserProfile, String), AppError> {
        let stored = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if stored.password_hash != self.hash_password(password) {
            return Err(invalid_credentials());
        }

        let token = self.open_session(&stored.id).await?;
        Ok((stored.to_profile(), token))
    }

    /// Resolves a bearer token to the owning user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown tokens.
    pub async fn resolve_token(&self, token: &str) -> Result<String, AppError> {
        self.sessions.resolve(token).await?.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired session token" }),
            )
        })
    }

    /// Looks up the profile for an already-authenticated user id.
    pub async fn profile(&self, user_id: &str) -> Result<UserProfile, AppError> {
        let stored = self.users.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "User no longer exists" }))
        })?;

        Ok(stored.to_profile())
    }

    async fn open_session(&self, user_id: &str) -> Result<String, AppError> {
        let token = generate_session_token();
        self.sessions.insert(&token, user_id).await?;
        Ok(token)
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({ "reason": "Invalid email or password" }),
    )
}
