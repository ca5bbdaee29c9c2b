use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ApiEnvelope, ErrorDto},
        yard::YardAuctionDto,
    },
    service::yard::YardService,
    state::AppState,
};

/// Tag for grouping yard endpoints in OpenAPI documentation
pub static YARD_TAG: &str = "yard";

/// Get a yard's auctions with display buckets.
///
/// Each auction carries a derived `displayStatus` of `live`, `upcoming`,
/// `sold`, or `ended`, computed from the stored status and the auction
/// window. Responses are served from a short-lived cache.
///
/// # Returns
/// - `200 OK` - Auction listing for the yard
/// - `404 Not Found` - Unknown yard
#[utoipa::path(
    get,
    path = "/api/yards/{id}/auctions",
    tag = YARD_TAG,
    params(
        ("id" = i32, Path, description = "Yard ID")
    ),
    responses(
        (status = 200, description = "Yard auction listing", body = ApiEnvelope<Vec<YardAuctionDto>>),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_yard_auctions(
    State(state): State<AppState>,
    Path(yard_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let listing = YardService::new(&state.db, &state.cache)
        .get_yard_auctions(yard_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok("OK", listing))))
}
