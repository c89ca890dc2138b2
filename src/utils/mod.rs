//! Shared utilities: code generation, opaque ids, URL normalization.

pub mod base62;
pub mod idgen;
pub mod url_normalizer;
