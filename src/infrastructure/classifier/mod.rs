//! Best-effort category annotation for long URLs.

mod keyword;
mod service;

pub use keyword::KeywordClassifier;
pub use service::{CategoryClassifier, ClassifierError, FALLBACK_CATEGORY};

#[cfg(test)]
pub use service::MockCategoryClassifier;
