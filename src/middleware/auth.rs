use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{permission, session::AuthSession},
};

/// Access requirement a handler can demand from the caller.
pub enum Permission {
    /// Caller's role must normalize to the admin role.
    Admin,
    /// Caller's role must grant the named permission string.
    Allow(&'static str),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user and enforces the given requirements.
    ///
    /// Suspended accounts are rejected regardless of role. Pass an empty
    /// slice to require only a valid login.
    ///
    /// # Returns
    /// - `Ok(user)` - Caller is authenticated and meets every requirement
    /// - `Err(AppError::AuthErr(_))` - Missing session, stale session,
    ///   suspended account, or insufficient permissions
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.status == entity::user::UserStatus::Suspended {
            return Err(AuthError::Suspended(user_id).into());
        }

        for required in permissions {
            let allowed = match required {
                Permission::Admin => permission::is_admin(&user.role),
                Permission::Allow(name) => permission::role_allows(&user.role, name),
            };

            if !allowed {
                let detail = match required {
                    Permission::Admin => "admin role required".to_string(),
                    Permission::Allow(name) => {
                        format!("role '{}' does not grant '{}'", user.role, name)
                    }
                };
                return Err(AuthError::AccessDenied(user_id, detail).into());
            }
        }

        Ok(user)
    }
}
