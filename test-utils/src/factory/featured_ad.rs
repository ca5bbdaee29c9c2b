//! Featured ad factory for creating test featured ad entities.

use chrono::Utc;
use entity::featured_ad::ListingType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test featured ads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::featured_ad::FeaturedAdFactory;
///
/// let ad = FeaturedAdFactory::new(&db, 1)
///     .priority(5)
///     .expires_at(Utc::now() - chrono::Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct FeaturedAdFactory<'a> {
    db: &'a DatabaseConnection,
    listing_type: ListingType,
    listing_id: i32,
    priority: i32,
    starts_at: chrono::DateTime<Utc>,
    expires_at: chrono::DateTime<Utc>,
    active: bool,
}

impl<'a> FeaturedAdFactory<'a> {
    /// Creates a new FeaturedAdFactory with default values.
    ///
    /// Defaults:
    /// - listing_type: `Car`
    /// - priority: `0`
    /// - starts_at: now
    /// - expires_at: 7 days from now
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `listing_id` - Id of the promoted listing
    ///
    /// # Returns
    /// - `FeaturedAdFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, listing_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            listing_type: ListingType::Car,
            listing_id,
            priority: 0,
            starts_at: now,
            expires_at: now + chrono::Duration::days(7),
            active: true,
        }
    }

    /// Sets the listing type.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = listing_type;
        self
    }

    /// Sets the sort priority.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the expiry timestamp.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets the active flag.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the featured ad entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::featured_ad::Model)` - Created featured ad entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::featured_ad::Model, DbErr> {
        entity::featured_ad::ActiveModel {
            id: ActiveValue::NotSet,
            listing_type: ActiveValue::Set(self.listing_type),
            listing_id: ActiveValue::Set(self.listing_id),
            priority: ActiveValue::Set(self.priority),
            starts_at: ActiveValue::Set(self.starts_at),
            expires_at: ActiveValue::Set(self.expires_at),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active featured ad with default values.
///
/// Shorthand for `FeaturedAdFactory::new(db, listing_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `listing_id` - Id of the promoted listing
///
/// # Returns
/// - `Ok(entity::featured_ad::Model)` - Created featured ad entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_featured_ad(
    db: &DatabaseConnection,
    listing_id: i32,
) -> Result<entity::featured_ad::Model, DbErr> {
    FeaturedAdFactory::new(db, listing_id).build().await
}
