use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors surfaced by the sale-acceptance flow, each carrying the machine
/// error code the API contract promises.
#[derive(Error, Debug)]
pub enum SaleError {
    /// Request body is missing `bidderId` or `amount`.
    #[error("bidderId and amount are required")]
    MissingFields,

    /// `amount` is not a finite number greater than zero.
    #[error("Winning amount must be a positive number")]
    InvalidAmount,

    /// No auction with the given id.
    #[error("Auction {0} not found")]
    AuctionNotFound(i32),

    /// The supplied bidder identifier matched no user.
    #[error("Winning bidder not found")]
    BuyerNotFound,

    /// The caller is authenticated but is not the auction's seller.
    #[error("User {0} is not the seller of this auction")]
    NotSeller(i32),

    /// The auction's current status does not allow accepting a sale.
    ///
    /// Only UPCOMING, ACTIVE, and ENDED auctions can be sold.
    #[error("Auction is {status}, sale can no longer be accepted")]
    NotActive { status: String },
}

/// Maps sale errors onto the documented status codes and error codes.
///
/// # Returns
/// - 400 Bad Request - `MISSING_FIELDS`, `INVALID_AMOUNT`, `AUCTION_NOT_ACTIVE`
/// - 403 Forbidden - `NOT_SELLER`
/// - 404 Not Found - `AUCTION_NOT_FOUND`, `USER_NOT_FOUND`
impl IntoResponse for SaleError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::MissingFields => (StatusCode::BAD_REQUEST, "MISSING_FIELDS"),
            Self::InvalidAmount => (StatusCode::BAD_REQUEST, "INVALID_AMOUNT"),
            Self::AuctionNotFound(_) => (StatusCode::NOT_FOUND, "AUCTION_NOT_FOUND"),
            Self::BuyerNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            Self::NotSeller(_) => (StatusCode::FORBIDDEN, "NOT_SELLER"),
            Self::NotActive { .. } => (StatusCode::BAD_REQUEST, "AUCTION_NOT_ACTIVE"),
        };

        (status, Json(ErrorDto::with_code(self.to_string(), code))).into_response()
    }
}
