use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The caller has no active login. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotLoggedIn,

    /// The session references a user that no longer exists.
    ///
    /// Usually means the account was deleted while a session was still live.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match an account.
    ///
    /// Deliberately indistinguishable from an unknown email so the login
    /// endpoint cannot be used to enumerate accounts. Results in a 401.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but has been suspended by an admin.
    #[error("User {0} is suspended")]
    Suspended(i32),

    /// The caller is authenticated but their role does not grant the
    /// required permission.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the precise reason is carried in the
/// error itself and logged by the 500 fallback path when relevant.
///
/// # Returns
/// - 401 Unauthorized - Missing/stale session or bad credentials
/// - 403 Forbidden - Suspended account or insufficient role permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_code("Authentication required", "UNAUTHORIZED")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_code(
                    "Invalid email or password",
                    "INVALID_CREDENTIALS",
                )),
            )
                .into_response(),
            Self::Suspended(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::with_code(
                    "This account is suspended",
                    "ACCOUNT_SUSPENDED",
                )),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::with_code(
                        "You do not have permission to perform this action",
                        "FORBIDDEN",
                    )),
                )
                    .into_response()
            }
        }
    }
}
