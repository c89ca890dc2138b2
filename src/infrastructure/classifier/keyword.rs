//! Keyword-based category classifier.

use async_trait::async_trait;

use super::service::{CategoryClassifier, ClassifierError};

/// Host/path keywords mapped to category labels.
///
/// First match wins; order puts the more specific keywords ahead of the
/// generic ones.
const KEYWORD_CATEGORIES: &[(&str, &str)] = &[
    ("github", "Tech"),
    ("gitlab", "Tech"),
    ("stackoverflow", "Tech"),
    ("docs.rs", "Tech"),
    ("twitter", "Social"),
    ("x.com", "Social"),
    ("facebook", "Social"),
    ("instagram", "Social"),
    ("linkedin", "Social"),
    ("reddit", "Social"),
    ("news", "News"),
    ("bbc", "News"),
    ("reuters", "News"),
    ("wikipedia", "Education"),
    ("coursera", "Education"),
    ("edu", "Education"),
    ("amazon", "Shopping"),
    ("ebay", "Shopping"),
    ("shop", "Shopping"),
];

/// Classifies URLs by matching well-known keywords against the host and path.
///
/// Stands in for a remote text-classification service with the same
/// vocabulary (Tech, Social, News, Education, Shopping, Other). Deliberately
/// simple: the interesting behavior lives at the trait seam, where failures
/// degrade to the fallback category.
#[derive(Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CategoryClassifier for KeywordClassifier {
    async fn classify(&self, long_url: &str) -> Result<String, ClassifierError> {
        let haystack = long_url.to_ascii_lowercase();

        let category = KEYWORD_CATEGORIES
            .iter()
            .find(|(keyword, _)| haystack.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or("Other");

        Ok(category.to_string())
    }
}
