//! Yard factory for creating test yard entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a yard with generated name and location.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::yard::Model)` - Created yard entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_yard(db: &DatabaseConnection) -> Result<entity::yard::Model, DbErr> {
    let id = next_id();
    entity::yard::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Yard {}", id)),
        location: ActiveValue::Set(format!("Lot {}", id)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
