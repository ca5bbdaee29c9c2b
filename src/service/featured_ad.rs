//! Featured ad administration.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::featured_ad::{CreateFeaturedAdParam, FeaturedAdRepository, UpdateFeaturedAdParam},
    error::AppError,
    model::featured_ad::{CreateFeaturedAdDto, UpdateFeaturedAdDto},
};

pub struct FeaturedAdService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeaturedAdService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of featured ads with the total count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::featured_ad::Model>, u64), AppError> {
        let result = FeaturedAdRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;
        Ok(result)
    }

    /// Creates a featured ad slot after validating the listing type and
    /// scheduling window.
    ///
    /// # Returns
    /// - `Ok(ad)` - The created slot
    /// - `Err(AppError::BadRequest(_))` - Unknown listing type, non-positive
    ///   priority window, or expiry not after the start
    pub async fn create(
        &self,
        dto: CreateFeaturedAdDto,
    ) -> Result<entity::featured_ad::Model, AppError> {
        let Some(listing_type) = entity::featured_ad::ListingType::parse(&dto.listing_type) else {
            return Err(AppError::BadRequest(format!(
                "Unknown listing type '{}'",
                dto.listing_type
            )));
        };

        if dto.priority < 0 {
            return Err(AppError::BadRequest(
                "Priority must not be negative".to_string(),
            ));
        }

        let starts_at = dto.starts_at.unwrap_or_else(Utc::now);

        if dto.expires_at <= starts_at {
            return Err(AppError::BadRequest(
                "Expiry must be after the start date".to_string(),
            ));
        }

        let ad = FeaturedAdRepository::new(self.db)
            .create(CreateFeaturedAdParam {
                listing_type,
                listing_id: dto.listing_id,
                priority: dto.priority,
                starts_at,
                expires_at: dto.expires_at,
            })
            .await?;

        Ok(ad)
    }

    /// Applies a partial update to an existing slot.
    ///
    /// # Returns
    /// - `Ok(ad)` - The updated slot
    /// - `Err(AppError::NotFound(_))` - No ad with that id
    /// - `Err(AppError::BadRequest(_))` - Negative priority
    pub async fn update(
        &self,
        ad_id: i32,
        dto: UpdateFeaturedAdDto,
    ) -> Result<entity::featured_ad::Model, AppError> {
        let repo = FeaturedAdRepository::new(self.db);

        let Some(ad) = repo.find_by_id(ad_id).await? else {
            return Err(AppError::NotFound(format!("Featured ad {} not found", ad_id)));
        };

        if matches!(dto.priority, Some(priority) if priority < 0) {
            return Err(AppError::BadRequest(
                "Priority must not be negative".to_string(),
            ));
        }

        let updated = repo
            .update(
                ad,
                UpdateFeaturedAdParam {
                    priority: dto.priority,
                    expires_at: dto.expires_at,
                    active: dto.active,
                },
            )
            .await?;

        Ok(updated)
    }

    /// Deletes a slot.
    ///
    /// # Returns
    /// - `Ok(())` - Slot removed
    /// - `Err(AppError::NotFound(_))` - No ad with that id
    pub async fn delete(&self, ad_id: i32) -> Result<(), AppError> {
        let deleted = FeaturedAdRepository::new(self.db).delete(ad_id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!("Featured ad {} not found", ad_id)));
        }

        Ok(())
    }
}
