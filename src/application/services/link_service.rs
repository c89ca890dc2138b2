//! Link creation and listing service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::classifier::{CategoryClassifier, FALLBACK_CATEGORY};
use crate::utils::base62::generate_short_code;
use crate::utils::url_normalizer::normalize_url;

/// Maximum short-code generation attempts before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and listing shortened links.
///
/// Handles URL normalization, best-effort category annotation, and short
/// code generation with collision retry.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    classifier: Arc<dyn CategoryClassifier>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, classifier: Arc<dyn CategoryClassifier>) -> Self {
        Self {
            link_repository,
            classifier,
        }
    }

    /// Creates a short link owned by `owner_user_id`.
    ///
    /// # Flow
    ///
    /// 1. Normalize and validate the long URL (http/https only)
    /// 2. Ask the classifier for a category; any failure degrades to
    ///    `"General"` and never blocks creation
    /// 3. Generate a 7-character code, retrying on collision up to
    ///    [`MAX_CODE_ATTEMPTS`] times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or malformed.
    /// Returns [`AppError::Internal`] if code generation keeps colliding.
    pub async fn create_link(
        &self,
        owner_user_id: &str,
        long_url: &str,
    ) -> Result<Link, AppError> {
        let normalized_url = normalize_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let category = match self.classifier.classify(&normalized_url).await {
            Ok(label) => label,
            Err(e) => {
                warn!("classifier failed, falling back to default category: {e}");
                FALLBACK_CATEGORY.to_string()
            }
        };

        for _ in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                owner_user_id: owner_user_id.to_string(),
                code: generate_short_code(),
                long_url: normalized_url.clone(),
                category: Some(category.clone()),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                // Truncated codes collide occasionally; generate a fresh one.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Lists the caller's links, most recent first.
    pub async fn list_links(&self, owner_user_id: &str) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_owner(owner_user_id).await
    }
}
