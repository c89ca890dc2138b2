//! In-memory session token table.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Session table mapping opaque bearer tokens to user ids.
#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<String, String>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn insert(&self, token: &str, user_id: &str) -> Result<(), AppError> {
        self.sessions
            .write()
            .expect("session table lock poisoned")
            .insert(token.to_string(), user_id.to_string());
        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let sessions = self.sessions.read().expect("session table lock poisoned");
        Ok(sessions.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_resolve() {
        let repo = MemorySessionRepository::new();
        repo.insert("tok-1", "u1").await.unwrap();

        assert_eq!(repo.resolve("tok-1").await.unwrap().as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let repo = MemorySessionRepository::new();
        assert!(repo.resolve("missing").await.unwrap().is_none());
    }
}
