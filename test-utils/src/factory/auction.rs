//! Auction factory for creating test auction entities.
//!
//! This module provides factory methods for creating auction entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use entity::auction::AuctionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test auctions with customizable fields.
///
/// Provides a builder pattern for creating auction entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::auction::AuctionFactory;
/// use entity::auction::AuctionStatus;
///
/// let auction = AuctionFactory::new(&db, seller.id, car.id)
///     .status(AuctionStatus::Ended)
///     .current_price(22000.0)
///     .build()
///     .await?;
/// ```
pub struct AuctionFactory<'a> {
    db: &'a DatabaseConnection,
    seller_id: i32,
    car_id: i32,
    yard_id: Option<i32>,
    status: AuctionStatus,
    starting_price: f64,
    current_price: f64,
    highest_bidder_id: Option<i32>,
    start_date: chrono::DateTime<Utc>,
    end_date: chrono::DateTime<Utc>,
}

impl<'a> AuctionFactory<'a> {
    /// Creates a new AuctionFactory with default values.
    ///
    /// Defaults:
    /// - status: `Active`
    /// - starting_price / current_price: `10000.0`
    /// - highest_bidder_id: `None`
    /// - start_date: 1 hour ago
    /// - end_date: 1 hour from now
    /// - yard_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `seller_id` - Listing seller's user id
    /// - `car_id` - The car being auctioned
    ///
    /// # Returns
    /// - `AuctionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, seller_id: i32, car_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            seller_id,
            car_id,
            yard_id: None,
            status: AuctionStatus::Active,
            starting_price: 10000.0,
            current_price: 10000.0,
            highest_bidder_id: None,
            start_date: now - chrono::Duration::hours(1),
            end_date: now + chrono::Duration::hours(1),
        }
    }

    /// Sets the auction status.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: AuctionStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the yard the auction runs at.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn yard_id(mut self, yard_id: Option<i32>) -> Self {
        self.yard_id = yard_id;
        self
    }

    /// Sets the current highest price.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn current_price(mut self, current_price: f64) -> Self {
        self.current_price = current_price;
        self
    }

    /// Sets the highest bidder.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn highest_bidder_id(mut self, highest_bidder_id: Option<i32>) -> Self {
        self.highest_bidder_id = highest_bidder_id;
        self
    }

    /// Sets the bidding window start.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_date(mut self, start_date: chrono::DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the bidding window end.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn end_date(mut self, end_date: chrono::DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the auction entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::auction::Model)` - Created auction entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::auction::Model, DbErr> {
        entity::auction::ActiveModel {
            id: ActiveValue::NotSet,
            seller_id: ActiveValue::Set(self.seller_id),
            car_id: ActiveValue::Set(self.car_id),
            yard_id: ActiveValue::Set(self.yard_id),
            status: ActiveValue::Set(self.status),
            starting_price: ActiveValue::Set(self.starting_price),
            current_price: ActiveValue::Set(self.current_price),
            highest_bidder_id: ActiveValue::Set(self.highest_bidder_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active auction with default values.
///
/// Shorthand for `AuctionFactory::new(db, seller_id, car_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `seller_id` - Listing seller's user id
/// - `car_id` - The car being auctioned
///
/// # Returns
/// - `Ok(entity::auction::Model)` - Created auction entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_auction(
    db: &DatabaseConnection,
    seller_id: i32,
    car_id: i32,
) -> Result<entity::auction::Model, DbErr> {
    AuctionFactory::new(db, seller_id, car_id).build().await
}
