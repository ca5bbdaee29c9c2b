use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedAdDto {
    pub id: i32,
    pub listing_type: String,
    pub listing_id: i32,
    pub priority: i32,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::featured_ad::Model> for FeaturedAdDto {
    fn from(ad: entity::featured_ad::Model) -> Self {
        Self {
            id: ad.id,
            listing_type: ad.listing_type.as_str().to_string(),
            listing_id: ad.listing_id,
            priority: ad.priority,
            starts_at: ad.starts_at,
            expires_at: ad.expires_at,
            active: ad.active,
            created_at: ad.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeaturedAdDto {
    /// One of `CAR`, `AUCTION`, `SHOWROOM`, `TRANSPORT`.
    pub listing_type: String,
    pub listing_id: i32,
    #[serde(default)]
    pub priority: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeaturedAdDto {
    pub priority: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}
