use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use tracing::info;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{
        api::{ApiEnvelope, ErrorDto},
        user::{CurrentUserDto, LoginDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Authenticate with email and password.
///
/// Verifies the credentials, rejects suspended accounts, and establishes a
/// session on success.
///
/// # Returns
/// - `200 OK` - Envelope with the authenticated user
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - Account suspended
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiEnvelope<CurrentUserDto>),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account suspended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .authenticate(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    info!("user {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("Logged in", CurrentUserDto::from(user))),
    ))
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - Envelope with the user and their permission strings
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiEnvelope<CurrentUserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("OK", CurrentUserDto::from(user))),
    ))
}

/// Clear the caller's session.
///
/// Always succeeds, logged in or not.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiEnvelope<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(ApiEnvelope::message("Logged out"))))
}
