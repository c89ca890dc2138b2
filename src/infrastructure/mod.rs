//! Infrastructure layer: storage, cache, and external integrations.

pub mod cache;
pub mod classifier;
pub mod persistence;
