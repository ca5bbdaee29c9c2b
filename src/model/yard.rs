//! Yard listing shapes and the display-status classifier.

use chrono::{DateTime, Utc};
use entity::auction::AuctionStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The bucket a yard page sorts an auction into.
///
/// This is a presentation status derived from the stored status plus the
/// auction window; it never feeds back into the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Live,
    Upcoming,
    Sold,
    Ended,
}

/// Classifies an auction for yard display.
///
/// Explicit terminal statuses take precedence over date inference: a SOLD
/// auction stays `sold` and an ENDED or CANCELLED one stays `ended` no matter
/// what its window says. For the remaining statuses the window decides, so an
/// ACTIVE auction whose start date is still in the future shows as `upcoming`
/// and one past its end date shows as `ended` even before the sweep job has
/// caught up.
pub fn display_status(
    status: &AuctionStatus,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DisplayStatus {
    match status {
        AuctionStatus::Sold => DisplayStatus::Sold,
        AuctionStatus::Ended | AuctionStatus::Cancelled => DisplayStatus::Ended,
        AuctionStatus::Upcoming | AuctionStatus::Active => {
            if now >= end_date {
                DisplayStatus::Ended
            } else if now >= start_date {
                DisplayStatus::Live
            } else {
                DisplayStatus::Upcoming
            }
        }
    }
}

/// Auction row on a yard page, carrying the derived display bucket.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YardAuctionDto {
    pub id: i32,
    pub car_id: i32,
    pub status: String,
    pub display_status: DisplayStatus,
    pub starting_price: f64,
    pub current_price: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl YardAuctionDto {
    pub fn from_model(auction: entity::auction::Model, now: DateTime<Utc>) -> Self {
        let display_status = display_status(
            &auction.status,
            auction.start_date,
            auction.end_date,
            now,
        );

        Self {
            id: auction.id,
            car_id: auction.car_id,
            status: auction.status.as_str().to_string(),
            display_status,
            starting_price: auction.starting_price,
            current_price: auction.current_price,
            start_date: auction.start_date,
            end_date: auction.end_date,
        }
    }
}
