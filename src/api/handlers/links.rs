//! Handlers for link creation and listing.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::links::{LinkInfo, ListLinksResponse, ShortenRequest};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL owned by the caller.
///
/// # Endpoint
///
/// `POST /api/shorten` — requires a bearer session token.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<LinkInfo>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(&current_user.user_id, &payload.url)
        .await?;

    Ok(Json(link.into()))
}

/// Lists the caller's links, most recent first.
///
/// # Endpoint
///
/// `GET /api/links` — requires a bearer session token.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let links = state.link_service.list_links(&current_user.user_id).await?;

    Ok(Json(ListLinksResponse {
        total: links.len(),
        items: links.into_iter().map(LinkInfo::from).collect(),
    }))
}
