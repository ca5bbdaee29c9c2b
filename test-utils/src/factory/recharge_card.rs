//! Recharge card factory for creating test card entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::recharge_card::CardStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recharge cards with customizable fields.
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    amount: f64,
    status: CardStatus,
    redeemed_by: Option<i32>,
    redeemed_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - code: `"AY-TEST-{id}"` where id is auto-incremented
    /// - amount: `100.0`
    /// - status: `Unused`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("AY-TEST-{:04}", next_id()),
            amount: 100.0,
            status: CardStatus::Unused,
            redeemed_by: None,
            redeemed_at: None,
        }
    }

    /// Sets the card code.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the face value.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the card status.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: CardStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the card redeemed by the given user.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn redeemed_by(mut self, user_id: i32) -> Self {
        self.status = CardStatus::Redeemed;
        self.redeemed_by = Some(user_id);
        self.redeemed_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::recharge_card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::recharge_card::Model, DbErr> {
        entity::recharge_card::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            amount: ActiveValue::Set(self.amount),
            status: ActiveValue::Set(self.status),
            redeemed_by: ActiveValue::Set(self.redeemed_by),
            redeemed_at: ActiveValue::Set(self.redeemed_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unused card with default values.
///
/// Shorthand for `CardFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::recharge_card::Model)` - Created card entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::recharge_card::Model, DbErr> {
    CardFactory::new(db).build().await
}
