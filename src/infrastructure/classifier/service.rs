//! Category classifier trait and error types.

use async_trait::async_trait;

/// Category applied when classification fails for any reason.
pub const FALLBACK_CATEGORY: &str = "General";

/// Errors that can occur during category classification.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),
}

/// Trait for annotating long URLs with a short category label.
///
/// An external, best-effort collaborator: link creation calls it once and
/// substitutes [`FALLBACK_CATEGORY`] on any failure. A classifier error must
/// never prevent a link from being created.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryClassifier: Send + Sync {
    /// Returns a one-word category label for the URL.
    async fn classify(&self, long_url: &str) -> Result<String, ClassifierError>;
}
