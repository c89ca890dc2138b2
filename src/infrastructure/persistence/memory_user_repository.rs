//! In-memory user credential repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::StoredCredential;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Credential store keyed by user id, with email uniqueness enforced on insert.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, StoredCredential>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, credential: StoredCredential) -> Result<StoredCredential, AppError> {
        let mut users = self.users.write().expect("user store lock poisoned");

        if users.values().any(|u| u.email == credential.email) {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": credential.email }),
            ));
        }

        users.insert(credential.id.clone(), credential.clone());
        Ok(credential)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredCredential>, AppError> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<StoredCredential>, AppError> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.get(user_id).cloned())
    }
}
