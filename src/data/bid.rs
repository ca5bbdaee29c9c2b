//! Bid data repository for database operations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for bids.
pub struct BidRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BidRepository<'a> {
    /// Creates a new BidRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an auction's bid history, highest amount first.
    ///
    /// # Returns
    /// - `Ok(bids)` - Possibly empty list of bids
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_auction(&self, auction_id: i32) -> Result<Vec<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find()
            .filter(entity::bid::Column::AuctionId.eq(auction_id))
            .order_by_desc(entity::bid::Column::Amount)
            .all(self.db)
            .await
    }

    /// Checks whether a user has placed any bid on an auction.
    ///
    /// The sale flow uses this as an advisory cross-check: the seller may
    /// accept an off-book offer, but a missing bid is worth a log line.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one bid from the user exists
    /// - `Ok(false)` - No bid from the user on this auction
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_bid_from(&self, auction_id: i32, bidder_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Bid::find()
            .filter(entity::bid::Column::AuctionId.eq(auction_id))
            .filter(entity::bid::Column::BidderId.eq(bidder_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
