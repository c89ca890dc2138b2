//! In-memory link repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::idgen::generate_id;

/// Link store backed by a coarse-locked map keyed by short code.
///
/// A single `RwLock` is enough at this scale: the hot path takes a short
/// read lock, and the only frequent writer is the click worker's counter
/// increment. No await points are held across the lock.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a prebuilt link record, bypassing code generation.
    ///
    /// Test seeding helper, the moral equivalent of a raw `INSERT`.
    pub fn insert_link(&self, link: Link) {
        self.links
            .write()
            .expect("link store lock poisoned")
            .insert(link.code.clone(), link);
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().expect("link store lock poisoned");

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link {
            id: generate_id(),
            owner_user_id: new_link.owner_user_id,
            code: new_link.code.clone(),
            long_url: new_link.long_url,
            category: new_link.category,
            created_at: Utc::now(),
            clicks: 0,
        };

        links.insert(new_link.code, link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().expect("link store lock poisoned");
        Ok(links.get(code).cloned())
    }

    async fn list_by_owner(&self, owner_user_id: &str) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().expect("link store lock poisoned");

        let mut owned: Vec<Link> = links
            .values()
            .filter(|l| l.owner_user_id == owner_user_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().expect("link store lock poisoned");

        match links.get_mut(code) {
            Some(link) => {
                link.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
