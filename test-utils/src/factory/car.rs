//! Car factory for creating test car entities.
//!
//! This module provides factory methods for creating car entities with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::car::CarStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, seller.id)
///     .status(CarStatus::Sold)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    seller_id: i32,
    make: String,
    model: String,
    year: i32,
    price: f64,
    status: CarStatus,
    yard_id: Option<i32>,
    showroom_id: Option<i32>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - make: `"Toyota"`
    /// - model: `"Model {id}"` where id is auto-incremented
    /// - year: `2020`
    /// - price: `15000.0`
    /// - status: `Available`
    /// - yard_id, showroom_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `seller_id` - Owning seller's user id
    ///
    /// # Returns
    /// - `CarFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, seller_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            seller_id,
            make: "Toyota".to_string(),
            model: format!("Model {}", id),
            year: 2020,
            price: 15000.0,
            status: CarStatus::Available,
            yard_id: None,
            showroom_id: None,
        }
    }

    /// Sets the car status.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: CarStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the asking price.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the yard the car is stored at.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn yard_id(mut self, yard_id: Option<i32>) -> Self {
        self.yard_id = yard_id;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            id: ActiveValue::NotSet,
            seller_id: ActiveValue::Set(self.seller_id),
            make: ActiveValue::Set(self.make),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            yard_id: ActiveValue::Set(self.yard_id),
            showroom_id: ActiveValue::Set(self.showroom_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values for the given seller.
///
/// Shorthand for `CarFactory::new(db, seller_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `seller_id` - Owning seller's user id
///
/// # Returns
/// - `Ok(entity::car::Model)` - Created car entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_car(
    db: &DatabaseConnection,
    seller_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, seller_id).build().await
}
