//! Auction data repository for database operations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for auctions.
pub struct AuctionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionRepository<'a> {
    /// Creates a new AuctionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an auction by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(auction))` - Auction found
    /// - `Ok(None)` - No auction with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        auction_id: i32,
    ) -> Result<Option<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find_by_id(auction_id)
            .one(self.db)
            .await
    }

    /// Gets all auctions attached to a yard, soonest start first.
    ///
    /// # Arguments
    /// - `yard_id` - The yard whose auctions to list
    ///
    /// # Returns
    /// - `Ok(auctions)` - Possibly empty list of auctions
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_yard(&self, yard_id: i32) -> Result<Vec<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find()
            .filter(entity::auction::Column::YardId.eq(yard_id))
            .order_by_asc(entity::auction::Column::StartDate)
            .all(self.db)
            .await
    }
}
