//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an auction together with its seller and car.
///
/// This is a convenience method that creates:
/// 1. User (as seller)
/// 2. Car owned by that seller
/// 3. Auction listing the car
///
/// All entities are created with default values: the auction is ACTIVE with
/// a window spanning now. Use the individual factories if you need to
/// customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((seller, car, auction))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_auction_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::car::Model,
        entity::auction::Model,
    ),
    DbErr,
> {
    let seller = crate::factory::user::UserFactory::new(db).role("seller").build().await?;
    let car = crate::factory::car::create_car(db, seller.id).await?;
    let auction = crate::factory::auction::create_auction(db, seller.id, car.id).await?;

    Ok((seller, car, auction))
}

/// Creates a car and auction for an existing seller.
///
/// Useful when the test needs control over the seller account (role,
/// status, session) but not over the listing itself.
///
/// # Arguments
/// - `db` - Database connection
/// - `seller` - User entity to list the auction under
///
/// # Returns
/// - `Ok((car, auction))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_auction_for_seller(
    db: &DatabaseConnection,
    seller: &entity::user::Model,
) -> Result<(entity::car::Model, entity::auction::Model), DbErr> {
    let car = crate::factory::car::create_car(db, seller.id).await?;
    let auction = crate::factory::auction::create_auction(db, seller.id, car.id).await?;

    Ok((car, auction))
}
