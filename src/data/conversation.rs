//! Conversation data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository providing database operations for sale conversations.
pub struct ConversationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConversationRepository<'a> {
    /// Creates a new ConversationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a conversation thread between a seller and a buyer.
    ///
    /// # Returns
    /// - `Ok(conversation)` - The created thread
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        auction_id: i32,
        seller_id: i32,
        buyer_id: i32,
        subject: &str,
    ) -> Result<entity::conversation::Model, DbErr> {
        entity::conversation::ActiveModel {
            auction_id: ActiveValue::Set(auction_id),
            seller_id: ActiveValue::Set(seller_id),
            buyer_id: ActiveValue::Set(buyer_id),
            subject: ActiveValue::Set(subject.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the conversation attached to an auction, if any.
    ///
    /// # Returns
    /// - `Ok(Some(conversation))` - Thread found
    /// - `Ok(None)` - No thread for this auction
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_auction(
        &self,
        auction_id: i32,
    ) -> Result<Option<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find()
            .filter(entity::conversation::Column::AuctionId.eq(auction_id))
            .one(self.db)
            .await
    }
}
