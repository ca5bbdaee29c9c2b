use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto, PageQuery, Paginated},
        featured_ad::{CreateFeaturedAdDto, FeaturedAdDto, UpdateFeaturedAdDto},
    },
    service::featured_ad::FeaturedAdService,
    state::AppState,
};

/// Tag for grouping featured ad endpoints in OpenAPI documentation
pub static FEATURED_AD_TAG: &str = "featured-ad";

/// List featured ads, highest priority first.
///
/// # Access Control
/// - `Admin` - Only admins can manage featured ads
#[utoipa::path(
    get,
    path = "/api/admin/featured-ads",
    tag = FEATURED_AD_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of featured ads", body = ApiEnvelope<Paginated<FeaturedAdDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = query.resolve();

    let (ads, total) = FeaturedAdService::new(&state.db)
        .get_all_paginated(page - 1, per_page)
        .await?;

    let items: Vec<FeaturedAdDto> = ads.into_iter().map(FeaturedAdDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "OK",
            Paginated::new(items, total, page, per_page),
        )),
    ))
}

/// Create a featured ad slot.
///
/// # Access Control
/// - `Admin` - Only admins can manage featured ads
#[utoipa::path(
    post,
    path = "/api/admin/featured-ads",
    tag = FEATURED_AD_TAG,
    request_body = CreateFeaturedAdDto,
    responses(
        (status = 201, description = "Featured ad created", body = ApiEnvelope<FeaturedAdDto>),
        (status = 400, description = "Invalid listing type or window", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFeaturedAdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ad = FeaturedAdService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok("Featured ad created", FeaturedAdDto::from(ad))),
    ))
}

/// Update a featured ad slot.
///
/// # Access Control
/// - `Admin` - Only admins can manage featured ads
#[utoipa::path(
    put,
    path = "/api/admin/featured-ads/{id}",
    tag = FEATURED_AD_TAG,
    params(
        ("id" = i32, Path, description = "Featured ad ID")
    ),
    request_body = UpdateFeaturedAdDto,
    responses(
        (status = 200, description = "Featured ad updated", body = ApiEnvelope<FeaturedAdDto>),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Featured ad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(ad_id): Path<i32>,
    Json(payload): Json<UpdateFeaturedAdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ad = FeaturedAdService::new(&state.db).update(ad_id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("Featured ad updated", FeaturedAdDto::from(ad))),
    ))
}

/// Delete a featured ad slot.
///
/// # Access Control
/// - `Admin` - Only admins can manage featured ads
#[utoipa::path(
    delete,
    path = "/api/admin/featured-ads/{id}",
    tag = FEATURED_AD_TAG,
    params(
        ("id" = i32, Path, description = "Featured ad ID")
    ),
    responses(
        (status = 200, description = "Featured ad deleted", body = ApiEnvelope<String>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Featured ad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(ad_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    FeaturedAdService::new(&state.db).delete(ad_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::message("Featured ad deleted")),
    ))
}
