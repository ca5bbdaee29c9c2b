use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserIdent;

/// Body of the accept-sale request.
///
/// `bidder_id` and `amount` are required by the contract but optional here so
/// the handler can answer a missing field with `MISSING_FIELDS` instead of a
/// deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptSaleDto {
    pub bidder_id: Option<UserIdent>,
    pub amount: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Validated accept-sale input handed to the sale service.
#[derive(Debug)]
pub struct AcceptSaleParams {
    pub bidder: UserIdent,
    pub amount: f64,
    pub reason: Option<String>,
}

/// Result of a committed sale.
#[derive(Debug)]
pub struct SaleOutcome {
    pub auction_id: i32,
    pub winner_public_id: i64,
    pub winning_amount: f64,
    pub ended_at: DateTime<Utc>,
}

/// `data` payload of a successful accept-sale response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDataDto {
    pub auction_id: i32,
    pub winner_id: i64,
    pub winning_amount: f64,
    pub ended_at: DateTime<Utc>,
}

impl From<SaleOutcome> for SaleDataDto {
    fn from(outcome: SaleOutcome) -> Self {
        Self {
            auction_id: outcome.auction_id,
            winner_id: outcome.winner_public_id,
            winning_amount: outcome.winning_amount,
            ended_at: outcome.ended_at,
        }
    }
}

/// Public auction detail.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDto {
    pub id: i32,
    pub seller_id: i32,
    pub car_id: i32,
    pub yard_id: Option<i32>,
    pub status: String,
    pub starting_price: f64,
    pub current_price: f64,
    pub highest_bidder_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<entity::auction::Model> for AuctionDto {
    fn from(auction: entity::auction::Model) -> Self {
        Self {
            id: auction.id,
            seller_id: auction.seller_id,
            car_id: auction.car_id,
            yard_id: auction.yard_id,
            status: auction.status.as_str().to_string(),
            starting_price: auction.starting_price,
            current_price: auction.current_price,
            highest_bidder_id: auction.highest_bidder_id,
            start_date: auction.start_date,
            end_date: auction.end_date,
        }
    }
}

/// Single bid in an auction's bid history.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BidDto {
    pub id: i32,
    pub auction_id: i32,
    pub bidder_id: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<entity::bid::Model> for BidDto {
    fn from(bid: entity::bid::Model) -> Self {
        Self {
            id: bid.id,
            auction_id: bid.auction_id,
            bidder_id: bid.bidder_id,
            amount: bid.amount,
            created_at: bid.created_at,
        }
    }
}
