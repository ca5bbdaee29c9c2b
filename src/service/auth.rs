//! Password authentication.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email/password pair against the stored Argon2 hash.
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials`;
    /// suspended accounts are rejected after the password check so the
    /// response does not reveal whether the password was right.
    ///
    /// # Returns
    /// - `Ok(user)` - Credentials valid, account active
    /// - `Err(AppError::AuthErr(_))` - Bad credentials or suspended account
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let parsed_hash =
            PasswordHash::new(&user.password_hash).map_err(|err| InternalError::MalformedPasswordHash {
                user_id: user.id,
                reason: err.to_string(),
            })?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            warn!("failed login attempt for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status == entity::user::UserStatus::Suspended {
            return Err(AuthError::Suspended(user.id).into());
        }

        Ok(user)
    }
}

/// Hashes a password with a fresh random salt.
///
/// Used when seeding the bootstrap admin account.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::InternalError(format!("password hashing failed: {}", err)))?;

    Ok(hash.to_string())
}
