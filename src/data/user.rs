//! User data repository for database operations.
//!
//! Provides the `UserRepository` for looking up accounts by the various
//! identifiers API callers may use and for the admin listing and status
//! operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::UserIdent;

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by email address. Used by login.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by a caller-supplied identifier.
    ///
    /// Numeric identifiers resolve against the public id, string identifiers
    /// against the legacy external id. The two columns are disjoint keyspaces
    /// so a single identifier can never match two users.
    ///
    /// # Arguments
    /// - `ident` - The identifier as received on the wire
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User found
    /// - `Ok(None)` - No user matched the identifier
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_identifier(
        &self,
        ident: &UserIdent,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let query = match ident {
            UserIdent::PublicId(public_id) => entity::prelude::User::find()
                .filter(entity::user::Column::PublicId.eq(*public_id)),
            UserIdent::ExternalId(external_id) => entity::prelude::User::find()
                .filter(entity::user::Column::ExternalId.eq(external_id.as_str())),
        };

        query.one(self.db).await
    }

    /// Gets a page of users ordered by name, with the total user count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Requested page and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Sets a user's account status.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        user_id: i32,
        status: entity::user::UserStatus,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.status = ActiveValue::Set(status);
        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Checks if any admin-roled user exists.
    ///
    /// Used during first-time setup to decide whether to seed the bootstrap
    /// admin account. Matches the canonical role name only; aliased roles are
    /// normalized at login, not at seed time.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin exists yet
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq("admin"))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new user row.
    ///
    /// # Arguments
    /// - `param` - Field values for the new account
    ///
    /// # Returns
    /// - `Ok(user)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            public_id: ActiveValue::Set(param.public_id),
            external_id: ActiveValue::Set(param.external_id),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role),
            status: ActiveValue::Set(entity::user::UserStatus::Active),
            wallet_balance: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Field values for inserting a user.
pub struct CreateUserParam {
    pub public_id: i64,
    pub external_id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
}
