//! Handlers for signup, login, and the current-user endpoint.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::UserProfile;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and opens a session.
///
/// # Endpoint
///
/// `POST /auth/signup`
///
/// # Errors
///
/// Returns 400 Bad Request on invalid email/password shape.
/// Returns 409 Conflict if the email is already registered.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let (user, token) = state
        .auth_service
        .signup(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { user, token }))
}

/// Authenticates an existing account and opens a fresh session.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 401 Unauthorized on unknown email or wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let (user, token) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { user, token }))
}

/// Returns the authenticated caller's profile.
///
/// # Endpoint
///
/// `GET /api/me` — requires a bearer session token.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state.auth_service.profile(&current_user.user_id).await?;
    Ok(Json(profile))
}
