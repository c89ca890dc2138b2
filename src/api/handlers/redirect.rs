//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}` — public, no session required.
///
/// # Request Flow
///
/// 1. Resolve the code through the read-through cache (store fallback)
/// 2. Fire a click event into the ingestion queue (never blocks, never fails
///    the response)
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. An unknown code is
/// an expected outcome of user-supplied input, not a server failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    let referer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    let resolved = state
        .redirect_service
        .resolve(&code, user_agent, referer)
        .await?;

    match resolved {
        Some(long_url) => Ok(Redirect::temporary(&long_url)),
        None => Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        )),
    }
}
