//! DTOs for link creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkInfo {
    pub id: String,
    pub code: String,
    pub long_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl From<Link> for LinkInfo {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            long_url: link.long_url,
            category: link.category,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}

/// Response for the link listing endpoint.
#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub total: usize,
    pub items: Vec<LinkInfo>,
}
