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
        booking::{BookingDto, UpdateBookingStatusDto},
    },
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List transport bookings, soonest scheduled first.
///
/// # Access Control
/// - `bookings.view` - Admins and support staff
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = BOOKING_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of bookings", body = ApiEnvelope<Paginated<BookingDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller lacks bookings.view", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Allow("bookings.view")])
        .await?;

    let (page, per_page) = query.resolve();

    let (bookings, total) = BookingService::new(&state.db)
        .get_all_paginated(page - 1, per_page)
        .await?;

    let items: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "OK",
            Paginated::new(items, total, page, per_page),
        )),
    ))
}

/// Move a booking to a new status.
///
/// Transitions follow the booking lifecycle: PENDING may confirm or cancel,
/// CONFIRMED may start transit or cancel, IN_TRANSIT may complete.
///
/// # Access Control
/// - `bookings.manage` - Admins and support staff
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking updated", body = ApiEnvelope<BookingDto>),
        (status = 400, description = "Unknown status or illegal transition", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller lacks bookings.manage", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Allow("bookings.manage")])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(booking_id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("Booking updated", BookingDto::from(booking))),
    ))
}
