//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::UserStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Well-formed argon2id hash stored on factory users.
///
/// Parses cleanly but does not verify against any password; tests that
/// exercise login seed their own hash.
pub const PLACEHOLDER_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$T9wDrCYEYJzYyioG6nlWEKCQnH0PdzQqnB2QRYLfGVs";

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .role("admin")
///     .wallet_balance(250.0)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    public_id: i64,
    external_id: String,
    email: String,
    name: String,
    role: String,
    status: UserStatus,
    wallet_balance: f64,
    password_hash: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - public_id: `1_000_000 + id` where id is auto-incremented
    /// - external_id: `"ext-{id}"`
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"buyer"`
    /// - status: `Active`
    /// - wallet_balance: `0.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            public_id: 1_000_000 + id as i64,
            external_id: format!("ext-{}", id),
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            role: "buyer".to_string(),
            status: UserStatus::Active,
            wallet_balance: 0.0,
            password_hash: PLACEHOLDER_PASSWORD_HASH.to_string(),
        }
    }

    /// Sets the public id exposed to API clients.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn public_id(mut self, public_id: i64) -> Self {
        self.public_id = public_id;
        self
    }

    /// Sets the legacy external id.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Sets the email address.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role name. Stored as-is; aliases are normalized at check time.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the account status.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the wallet balance.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn wallet_balance(mut self, wallet_balance: f64) -> Self {
        self.wallet_balance = wallet_balance;
        self
    }

    /// Sets the stored password hash.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            public_id: ActiveValue::Set(self.public_id),
            external_id: ActiveValue::Set(self.external_id),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            wallet_balance: ActiveValue::Set(self.wallet_balance),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific role.
///
/// Shorthand for `UserFactory::new(db).role(role).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role name to store on the account
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
