//! Admin account management.

use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of users with the total count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), AppError> {
        let result = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;
        Ok(result)
    }

    /// Suspends or reactivates an account.
    ///
    /// An admin cannot change their own status, which keeps at least the
    /// acting admin able to log in.
    ///
    /// # Arguments
    /// - `acting_admin_id` - The admin performing the change
    /// - `user_id` - The target account
    /// - `status` - Raw status name from the request
    ///
    /// # Returns
    /// - `Ok(user)` - The updated account
    /// - `Err(AppError::NotFound(_))` - No user with that id
    /// - `Err(AppError::BadRequest(_))` - Unknown status name or self-target
    pub async fn update_status(
        &self,
        acting_admin_id: i32,
        user_id: i32,
        status: &str,
    ) -> Result<entity::user::Model, AppError> {
        let Some(next) = entity::user::UserStatus::parse(status) else {
            return Err(AppError::BadRequest(format!(
                "Unknown user status '{}'",
                status
            )));
        };

        if user_id == acting_admin_id {
            return Err(AppError::BadRequest(
                "You cannot change your own account status".to_string(),
            ));
        }

        let Some(updated) = UserRepository::new(self.db).set_status(user_id, next).await? else {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        };

        Ok(updated)
    }
}
