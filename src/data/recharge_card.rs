//! Recharge card data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for prepaid recharge cards.
pub struct RechargeCardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RechargeCardRepository<'a> {
    /// Creates a new RechargeCardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a card by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(card))` - Card found
    /// - `Ok(None)` - No card with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        card_id: i32,
    ) -> Result<Option<entity::recharge_card::Model>, DbErr> {
        entity::prelude::RechargeCard::find_by_id(card_id)
            .one(self.db)
            .await
    }

    /// Gets a page of cards, newest first, with the total count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Cards per page
    ///
    /// # Returns
    /// - `Ok((cards, total))` - Requested page and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::recharge_card::Model>, u64), DbErr> {
        let paginator = entity::prelude::RechargeCard::find()
            .order_by_desc(entity::recharge_card::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let cards = paginator.fetch_page(page).await?;

        Ok((cards, total))
    }

    /// Inserts a batch of unused cards with the given codes and face value.
    ///
    /// # Arguments
    /// - `codes` - Pre-generated unique card codes
    /// - `amount` - Face value shared by every card in the batch
    ///
    /// # Returns
    /// - `Ok(cards)` - The created cards, in insertion order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_batch(
        &self,
        codes: Vec<String>,
        amount: f64,
    ) -> Result<Vec<entity::recharge_card::Model>, DbErr> {
        let now = Utc::now();
        let mut cards = Vec::with_capacity(codes.len());

        for code in codes {
            let card = entity::recharge_card::ActiveModel {
                code: ActiveValue::Set(code),
                amount: ActiveValue::Set(amount),
                status: ActiveValue::Set(entity::recharge_card::CardStatus::Unused),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            cards.push(card);
        }

        Ok(cards)
    }

    /// Marks an unused card as disabled so it can never be redeemed.
    ///
    /// # Returns
    /// - `Ok(card)` - The updated card
    /// - `Err(DbErr)` - Database error during update
    pub async fn disable(
        &self,
        card: entity::recharge_card::Model,
    ) -> Result<entity::recharge_card::Model, DbErr> {
        let mut active: entity::recharge_card::ActiveModel = card.into();
        active.status = ActiveValue::Set(entity::recharge_card::CardStatus::Disabled);
        active.update(self.db).await
    }

    /// Checks whether a card code is already taken.
    ///
    /// # Returns
    /// - `Ok(true)` - A card with this code exists
    /// - `Ok(false)` - Code is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RechargeCard::find()
            .filter(entity::recharge_card::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
