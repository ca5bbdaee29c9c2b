//! Wallet operations: card redemption, withdrawals, and card administration.
//!
//! Balance changes always pair a `user.wallet_balance` update with a ledger
//! row inside one transaction, so the ledger can rebuild any balance.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};
use tracing::info;

use crate::{
    data::{recharge_card::RechargeCardRepository, wallet::WalletRepository},
    error::AppError,
};

/// Most cards an admin can mint in one batch.
const MAX_CARD_BATCH: u32 = 500;

pub struct WalletService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Redeems a recharge card into the caller's wallet.
    ///
    /// Card lookup, status flip, balance credit, and ledger insert all run
    /// in one transaction; two concurrent redemptions of the same card
    /// serialize on the card row and the loser sees it spent.
    ///
    /// # Returns
    /// - `Ok((balance, entry))` - New balance and the ledger entry
    /// - `Err(AppError::NotFound(_))` - Unknown card code
    /// - `Err(AppError::BadRequest(_))` - Card already redeemed or disabled
    pub async fn redeem_card(
        &self,
        user: &entity::user::Model,
        code: &str,
    ) -> Result<(f64, entity::wallet_transaction::Model), AppError> {
        let code = code.trim();

        let txn = self.db.begin().await?;

        let Some(card) = entity::prelude::RechargeCard::find()
            .filter(entity::recharge_card::Column::Code.eq(code))
            .one(&txn)
            .await?
        else {
            return Err(AppError::NotFound("Recharge card not found".to_string()));
        };

        match card.status {
            entity::recharge_card::CardStatus::Unused => {}
            entity::recharge_card::CardStatus::Redeemed => {
                return Err(AppError::BadRequest(
                    "This card has already been redeemed".to_string(),
                ));
            }
            entity::recharge_card::CardStatus::Disabled => {
                return Err(AppError::BadRequest("This card is disabled".to_string()));
            }
        }

        let amount = card.amount;
        let now = Utc::now();

        let mut card_active: entity::recharge_card::ActiveModel = card.into();
        card_active.status = ActiveValue::Set(entity::recharge_card::CardStatus::Redeemed);
        card_active.redeemed_by = ActiveValue::Set(Some(user.id));
        card_active.redeemed_at = ActiveValue::Set(Some(now));
        card_active.update(&txn).await?;

        // The caller's model was loaded before the transaction; re-read the
        // row here so a concurrent balance change is not overwritten.
        let Some(owner) = entity::prelude::User::find_by_id(user.id).one(&txn).await? else {
            return Err(AppError::NotFound(format!("User {} not found", user.id)));
        };

        let new_balance = owner.wallet_balance + amount;
        let mut owner_active: entity::user::ActiveModel = owner.into();
        owner_active.wallet_balance = ActiveValue::Set(new_balance);
        owner_active.update(&txn).await?;

        let entry = entity::wallet_transaction::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            amount: ActiveValue::Set(amount),
            kind: ActiveValue::Set(entity::wallet_transaction::TransactionKind::Recharge),
            reference: ActiveValue::Set(Some(code.to_string())),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!("user {} redeemed card for {:.2}", user.id, amount);

        Ok((new_balance, entry))
    }

    /// Gets the caller's ledger entries, newest first.
    pub async fn get_transactions(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::wallet_transaction::Model>, AppError> {
        let transactions = WalletRepository::new(self.db)
            .get_transactions_for_user(user_id)
            .await?;
        Ok(transactions)
    }

    /// Files a withdrawal request against the caller's balance.
    ///
    /// Funds stay in the wallet until an admin approves; the balance check
    /// here only rejects requests that could never be honored.
    ///
    /// # Returns
    /// - `Ok(withdrawal)` - The pending request
    /// - `Err(AppError::BadRequest(_))` - Non-positive amount or more than
    ///   the current balance
    pub async fn request_withdrawal(
        &self,
        user: &entity::user::Model,
        amount: f64,
    ) -> Result<entity::withdrawal::Model, AppError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::BadRequest(
                "Withdrawal amount must be a positive number".to_string(),
            ));
        }

        if amount > user.wallet_balance {
            return Err(AppError::BadRequest(
                "Withdrawal amount exceeds wallet balance".to_string(),
            ));
        }

        let withdrawal = WalletRepository::new(self.db)
            .create_withdrawal(user.id, amount)
            .await?;

        Ok(withdrawal)
    }

    /// Gets a page of withdrawal requests with the total count.
    pub async fn get_withdrawals_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::withdrawal::Model>, u64), AppError> {
        let result = WalletRepository::new(self.db)
            .get_withdrawals_paginated(page, per_page)
            .await?;
        Ok(result)
    }

    /// Approves or rejects a pending withdrawal.
    ///
    /// Approval debits the wallet and writes the ledger entry in the same
    /// transaction as the status change. The balance is re-read inside the
    /// transaction because it may have shrunk since the request was filed.
    ///
    /// # Returns
    /// - `Ok(withdrawal)` - The reviewed request
    /// - `Err(AppError::NotFound(_))` - No request with that id
    /// - `Err(AppError::BadRequest(_))` - Already reviewed, or insufficient
    ///   funds at approval time
    pub async fn review_withdrawal(
        &self,
        reviewer: &entity::user::Model,
        withdrawal_id: i32,
        approve: bool,
        note: Option<String>,
    ) -> Result<entity::withdrawal::Model, AppError> {
        let txn = self.db.begin().await?;

        let Some(withdrawal) = entity::prelude::Withdrawal::find_by_id(withdrawal_id)
            .one(&txn)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Withdrawal {} not found",
                withdrawal_id
            )));
        };

        if withdrawal.status != entity::withdrawal::WithdrawalStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Withdrawal has already been {}",
                withdrawal.status.as_str().to_lowercase()
            )));
        }

        let now = Utc::now();
        let user_id = withdrawal.user_id;
        let amount = withdrawal.amount;

        if approve {
            let Some(owner) = entity::prelude::User::find_by_id(user_id).one(&txn).await? else {
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            };

            if owner.wallet_balance < amount {
                return Err(AppError::BadRequest(
                    "User balance no longer covers this withdrawal".to_string(),
                ));
            }

            let mut owner_active: entity::user::ActiveModel = owner.clone().into();
            owner_active.wallet_balance = ActiveValue::Set(owner.wallet_balance - amount);
            owner_active.update(&txn).await?;

            entity::wallet_transaction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                amount: ActiveValue::Set(-amount),
                kind: ActiveValue::Set(entity::wallet_transaction::TransactionKind::Withdrawal),
                reference: ActiveValue::Set(Some(format!("withdrawal:{}", withdrawal_id))),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        let mut withdrawal_active: entity::withdrawal::ActiveModel = withdrawal.into();
        withdrawal_active.status = ActiveValue::Set(if approve {
            entity::withdrawal::WithdrawalStatus::Approved
        } else {
            entity::withdrawal::WithdrawalStatus::Rejected
        });
        withdrawal_active.reviewed_by = ActiveValue::Set(Some(reviewer.id));
        withdrawal_active.reviewed_at = ActiveValue::Set(Some(now));
        withdrawal_active.note = ActiveValue::Set(note);
        let reviewed = withdrawal_active.update(&txn).await?;

        txn.commit().await?;

        info!(
            "withdrawal {} {} by admin {}",
            withdrawal_id,
            if approve { "approved" } else { "rejected" },
            reviewer.id
        );

        Ok(reviewed)
    }

    /// Mints a batch of recharge cards with random codes.
    ///
    /// # Returns
    /// - `Ok(cards)` - The created cards, codes included
    /// - `Err(AppError::BadRequest(_))` - Zero or oversized batch, or a
    ///   non-positive face value
    pub async fn generate_cards(
        &self,
        count: u32,
        amount: f64,
    ) -> Result<Vec<entity::recharge_card::Model>, AppError> {
        if count == 0 || count > MAX_CARD_BATCH {
            return Err(AppError::BadRequest(format!(
                "Batch size must be between 1 and {}",
                MAX_CARD_BATCH
            )));
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::BadRequest(
                "Card value must be a positive number".to_string(),
            ));
        }

        let repo = RechargeCardRepository::new(self.db);

        let mut codes = Vec::with_capacity(count as usize);
        while codes.len() < count as usize {
            let code = generate_card_code();
            // 16 random characters make collisions unlikely but not impossible.
            if !repo.code_exists(&code).await? {
                codes.push(code);
            }
        }

        let cards = repo.create_batch(codes, amount).await?;

        Ok(cards)
    }

    /// Gets a page of recharge cards with the total count.
    pub async fn get_cards_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::recharge_card::Model>, u64), AppError> {
        let result = RechargeCardRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;
        Ok(result)
    }

    /// Permanently disables an unused card.
    ///
    /// # Returns
    /// - `Ok(card)` - The disabled card
    /// - `Err(AppError::NotFound(_))` - No card with that id
    /// - `Err(AppError::BadRequest(_))` - Card already redeemed or disabled
    pub async fn disable_card(
        &self,
        card_id: i32,
    ) -> Result<entity::recharge_card::Model, AppError> {
        let repo = RechargeCardRepository::new(self.db);

        let Some(card) = repo.find_by_id(card_id).await? else {
            return Err(AppError::NotFound(format!("Card {} not found", card_id)));
        };

        if card.status != entity::recharge_card::CardStatus::Unused {
            return Err(AppError::BadRequest(format!(
                "Only unused cards can be disabled, this one is {}",
                card.status.as_str().to_lowercase()
            )));
        }

        let disabled = repo.disable(card).await?;

        Ok(disabled)
    }
}

/// Generates a card code like `AY-7F3K-92QX-MB41`.
fn generate_card_code() -> String {
    let raw: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(|byte| (byte as char).to_ascii_uppercase())
        .collect();

    format!("AY-{}-{}-{}", &raw[0..4], &raw[4..8], &raw[8..12])
}
