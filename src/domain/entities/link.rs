//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Maps an immutable short code to an immutable long URL. `clicks` is
/// monotonically non-decreasing and mutated only by the background click
/// worker; `category` is a best-effort annotation that may be absent.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: String,
    pub owner_user_id: String,
    pub code: String,
    pub long_url: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: String,
        owner_user_id: String,
        code: String,
        long_url: String,
        category: Option<String>,
        created_at: DateTime<Utc>,
        clicks: u64,
    ) -> Self {
        Self {
            id,
            owner_user_id,
            code,
            long_url,
            category,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// The repository assigns `clicks = 0` and the creation timestamp.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub owner_user_id: String,
    pub code: String,
    pub long_url: String,
    pub category: Option<String>,
}
