//! Wallet ledger and withdrawal data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for wallet transactions and
/// withdrawal requests.
pub struct WalletRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletRepository<'a> {
    /// Creates a new WalletRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's ledger entries, newest first.
    ///
    /// # Returns
    /// - `Ok(transactions)` - Possibly empty list of ledger entries
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_transactions_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::wallet_transaction::Model>, DbErr> {
        entity::prelude::WalletTransaction::find()
            .filter(entity::wallet_transaction::Column::UserId.eq(user_id))
            .order_by_desc(entity::wallet_transaction::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Inserts a withdrawal request in the pending state.
    ///
    /// # Returns
    /// - `Ok(withdrawal)` - The created request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_withdrawal(
        &self,
        user_id: i32,
        amount: f64,
    ) -> Result<entity::withdrawal::Model, DbErr> {
        entity::withdrawal::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(entity::withdrawal::WithdrawalStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a withdrawal request by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(withdrawal))` - Request found
    /// - `Ok(None)` - No request with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_withdrawal(
        &self,
        withdrawal_id: i32,
    ) -> Result<Option<entity::withdrawal::Model>, DbErr> {
        entity::prelude::Withdrawal::find_by_id(withdrawal_id)
            .one(self.db)
            .await
    }

    /// Gets a page of withdrawal requests, oldest pending first, with the
    /// total count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Requests per page
    ///
    /// # Returns
    /// - `Ok((withdrawals, total))` - Requested page and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_withdrawals_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::withdrawal::Model>, u64), DbErr> {
        let paginator = entity::prelude::Withdrawal::find()
            .order_by_asc(entity::withdrawal::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let withdrawals = paginator.fetch_page(page).await?;

        Ok((withdrawals, total))
    }
}
