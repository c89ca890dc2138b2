//! Handler for the per-owner metrics endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::metrics::MetricsResponse;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the caller's analytics rollup.
///
/// # Endpoint
///
/// `GET /api/metrics` — requires a bearer session token.
///
/// # Consistency
///
/// Click counts reflect events the background worker has already applied;
/// clicks still queued are not included. The cache hit rate is global, not
/// owner-scoped.
pub async fn metrics_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<MetricsResponse>, AppError> {
    let metrics = state
        .metrics_service
        .compute(&current_user.user_id)
        .await?;

    Ok(Json(metrics.into()))
}
