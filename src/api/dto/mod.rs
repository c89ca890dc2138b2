//! Request/response types for the REST API.

pub mod auth;
pub mod health;
pub mod links;
pub mod metrics;
