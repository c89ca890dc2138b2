//! API route configuration.
//!
//! All routes here require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{list_links_handler, me_handler, metrics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Session-protected API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a shortened URL
/// - `GET  /links`   - List the caller's links, most recent first
/// - `GET  /metrics` - Per-owner analytics rollup
/// - `GET  /me`      - Authenticated caller's profile
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/metrics", get(metrics_handler))
        .route("/me", get(me_handler))
}
