//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Repository providing database operations for user notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification for a user.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `kind` - Machine category, e.g. `SALE_CONFIRMED`
    /// - `title` - Short heading shown in the client
    /// - `body` - Full notification text
    ///
    /// # Returns
    /// - `Ok(notification)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        kind: &str,
        title: &str,
        body: &str,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.to_string()),
            title: ActiveValue::Set(title.to_string()),
            body: ActiveValue::Set(body.to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
