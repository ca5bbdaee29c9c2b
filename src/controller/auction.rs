use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use tracing::info;

use crate::{
    data::{auction::AuctionRepository, bid::BidRepository},
    error::{sale::SaleError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto},
        auction::{AcceptSaleDto, AcceptSaleParams, AuctionDto, BidDto, SaleDataDto},
    },
    service::sale::SaleService,
    state::AppState,
};

/// Tag for grouping auction endpoints in OpenAPI documentation
pub static AUCTION_TAG: &str = "auction";

/// Accept a sale on an auction.
///
/// Marks the auction and its car as SOLD on behalf of the seller. The winning
/// bidder may be referenced by numeric public id or by legacy string id.
/// Notifications, the sale conversation, and cache invalidation run after the
/// commit and never fail the request.
///
/// # Access Control
/// - Caller must be logged in, hold `auctions.accept_sale`, and be the
///   auction's seller
///
/// # Returns
/// - `200 OK` - Sale committed
/// - `400 Bad Request` - `MISSING_FIELDS`, `INVALID_AMOUNT`, or
///   `AUCTION_NOT_ACTIVE`
/// - `403 Forbidden` - Caller is not the seller
/// - `404 Not Found` - Unknown auction or bidder
#[utoipa::path(
    post,
    path = "/api/auctions/{id}/accept-sale",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    request_body = AcceptSaleDto,
    responses(
        (status = 200, description = "Sale accepted", body = ApiEnvelope<SaleDataDto>),
        (status = 400, description = "Missing fields, invalid amount, or auction not in a sellable state", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not the auction's seller", body = ErrorDto),
        (status = 404, description = "Auction or bidder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_sale(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
    Json(payload): Json<AcceptSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Allow("auctions.accept_sale")])
        .await?;

    let (Some(bidder), Some(amount)) = (payload.bidder_id, payload.amount) else {
        return Err(SaleError::MissingFields.into());
    };

    let outcome = SaleService::new(&state.db, &state.cache)
        .accept_sale(
            auction_id,
            &user,
            AcceptSaleParams {
                bidder,
                amount,
                reason: payload.reason,
            },
        )
        .await?;

    info!(
        "auction {} sold to user {} for {:.2}",
        auction_id, outcome.winner_public_id, outcome.winning_amount
    );

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("Sale accepted", SaleDataDto::from(outcome))),
    ))
}

/// Get a single auction.
///
/// # Returns
/// - `200 OK` - Auction detail
/// - `404 Not Found` - Unknown auction
#[utoipa::path(
    get,
    path = "/api/auctions/{id}",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Auction detail", body = ApiEnvelope<AuctionDto>),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(auction) = AuctionRepository::new(&state.db).find_by_id(auction_id).await? else {
        return Err(AppError::NotFound(format!(
            "Auction {} not found",
            auction_id
        )));
    };

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("OK", AuctionDto::from(auction))),
    ))
}

/// Get an auction's bid history, highest first.
///
/// # Returns
/// - `200 OK` - Bid list
/// - `404 Not Found` - Unknown auction
#[utoipa::path(
    get,
    path = "/api/auctions/{id}/bids",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Bid history", body = ApiEnvelope<Vec<BidDto>>),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction_bids(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if AuctionRepository::new(&state.db)
        .find_by_id(auction_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Auction {} not found",
            auction_id
        )));
    }

    let bids = BidRepository::new(&state.db).get_by_auction(auction_id).await?;
    let bids: Vec<BidDto> = bids.into_iter().map(BidDto::from).collect();

    Ok((StatusCode::OK, Json(ApiEnvelope::ok("OK", bids))))
}
