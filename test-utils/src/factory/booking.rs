//! Transport booking factory for creating test booking entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::transport_booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transport bookings with customizable fields.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    pickup: String,
    dropoff: String,
    status: BookingStatus,
    price: Option<f64>,
    scheduled_at: chrono::DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - pickup: `"Pickup {id}"` where id is auto-incremented
    /// - dropoff: `"Dropoff {id}"`
    /// - status: `Pending`
    /// - price: `None`
    /// - scheduled_at: 1 day from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `customer_id` - Booking customer's user id
    ///
    /// # Returns
    /// - `BookingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            customer_id,
            pickup: format!("Pickup {}", id),
            dropoff: format!("Dropoff {}", id),
            status: BookingStatus::Pending,
            price: None,
            scheduled_at: Utc::now() + chrono::Duration::days(1),
        }
    }

    /// Sets the booking status.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the quoted price.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::transport_booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::transport_booking::Model, DbErr> {
        entity::transport_booking::ActiveModel {
            id: ActiveValue::NotSet,
            customer_id: ActiveValue::Set(self.customer_id),
            pickup: ActiveValue::Set(self.pickup),
            dropoff: ActiveValue::Set(self.dropoff),
            status: ActiveValue::Set(self.status),
            price: ActiveValue::Set(self.price),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
///
/// Shorthand for `BookingFactory::new(db, customer_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `customer_id` - Booking customer's user id
///
/// # Returns
/// - `Ok(entity::transport_booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::transport_booking::Model, DbErr> {
    BookingFactory::new(db, customer_id).build().await
}
