use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::middleware::permission;

/// Identifier a caller may use to reference another user.
///
/// Clients send either the numeric `publicId` or the string external id in the
/// same JSON field; the untagged representation accepts both shapes.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum UserIdent {
    PublicId(i64),
    ExternalId(String),
}

/// Login request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The authenticated caller, as returned by the auth endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl From<entity::user::Model> for CurrentUserDto {
    fn from(user: entity::user::Model) -> Self {
        let permissions = permission::permissions_for(&user.role)
            .iter()
            .map(|p| p.to_string())
            .collect();

        Self {
            id: user.public_id,
            name: user.name,
            email: user.email,
            role: user.role,
            permissions,
        }
    }
}

/// Row shape for the admin user listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListItemDto {
    pub id: i64,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub wallet_balance: f64,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserListItemDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.public_id,
            external_id: user.external_id,
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status.as_str().to_string(),
            wallet_balance: user.wallet_balance,
            created_at: user.created_at,
        }
    }
}

/// Body for the admin suspend/reactivate endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserStatusDto {
    /// Either `ACTIVE` or `SUSPENDED`.
    pub status: String,
}
