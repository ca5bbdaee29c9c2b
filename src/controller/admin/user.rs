use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use tracing::info;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto, PageQuery, Paginated},
        user::{UpdateUserStatusDto, UserListItemDto},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user admin endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List accounts ordered by name.
///
/// # Access Control
/// - `users.view` - Admins and support staff
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of users", body = ApiEnvelope<Paginated<UserListItemDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller lacks users.view", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Allow("users.view")])
        .await?;

    let (page, per_page) = query.resolve();

    let (users, total) = UserService::new(&state.db)
        .get_all_paginated(page - 1, per_page)
        .await?;

    let items: Vec<UserListItemDto> = users.into_iter().map(UserListItemDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "OK",
            Paginated::new(items, total, page, per_page),
        )),
    ))
}

/// Suspend or reactivate an account.
///
/// # Access Control
/// - `Admin` - Only admins can change account status
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/status",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "User updated", body = ApiEnvelope<UserListItemDto>),
        (status = 400, description = "Unknown status or self-target", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let updated = UserService::new(&state.db)
        .update_status(admin.id, user_id, &payload.status)
        .await?;

    info!(
        "admin {} set user {} status to {}",
        admin.id,
        user_id,
        updated.status.as_str()
    );

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("User updated", UserListItemDto::from(updated))),
    ))
}
