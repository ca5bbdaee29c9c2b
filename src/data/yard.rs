//! Yard data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for yards.
pub struct YardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> YardRepository<'a> {
    /// Creates a new YardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a yard by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(yard))` - Yard found
    /// - `Ok(None)` - No yard with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, yard_id: i32) -> Result<Option<entity::yard::Model>, DbErr> {
        entity::prelude::Yard::find_by_id(yard_id).one(self.db).await
    }
}
