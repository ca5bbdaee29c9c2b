//! Bid factory for creating test bid entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a bid on an auction.
///
/// # Arguments
/// - `db` - Database connection
/// - `auction_id` - Auction being bid on
/// - `bidder_id` - Bidding user's id
/// - `amount` - Bid amount
///
/// # Returns
/// - `Ok(entity::bid::Model)` - Created bid entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bid(
    db: &DatabaseConnection,
    auction_id: i32,
    bidder_id: i32,
    amount: f64,
) -> Result<entity::bid::Model, DbErr> {
    entity::bid::ActiveModel {
        id: ActiveValue::NotSet,
        auction_id: ActiveValue::Set(auction_id),
        bidder_id: ActiveValue::Set(bidder_id),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
