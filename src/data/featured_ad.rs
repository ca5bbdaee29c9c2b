//! Featured ad data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for featured ad slots.
pub struct FeaturedAdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeaturedAdRepository<'a> {
    /// Creates a new FeaturedAdRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a featured ad by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(ad))` - Ad found
    /// - `Ok(None)` - No ad with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        ad_id: i32,
    ) -> Result<Option<entity::featured_ad::Model>, DbErr> {
        entity::prelude::FeaturedAd::find_by_id(ad_id).one(self.db).await
    }

    /// Gets a page of featured ads, highest priority first, with the total
    /// count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Ads per page
    ///
    /// # Returns
    /// - `Ok((ads, total))` - Requested page and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::featured_ad::Model>, u64), DbErr> {
        let paginator = entity::prelude::FeaturedAd::find()
            .order_by_desc(entity::featured_ad::Column::Priority)
            .order_by_asc(entity::featured_ad::Column::ExpiresAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let ads = paginator.fetch_page(page).await?;

        Ok((ads, total))
    }

    /// Inserts a new featured ad slot.
    ///
    /// # Arguments
    /// - `param` - Field values for the new slot
    ///
    /// # Returns
    /// - `Ok(ad)` - The created ad
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateFeaturedAdParam,
    ) -> Result<entity::featured_ad::Model, DbErr> {
        entity::featured_ad::ActiveModel {
            listing_type: ActiveValue::Set(param.listing_type),
            listing_id: ActiveValue::Set(param.listing_id),
            priority: ActiveValue::Set(param.priority),
            starts_at: ActiveValue::Set(param.starts_at),
            expires_at: ActiveValue::Set(param.expires_at),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to a featured ad.
    ///
    /// # Arguments
    /// - `ad` - The current row
    /// - `param` - Fields to change; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(ad)` - The updated ad
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        ad: entity::featured_ad::Model,
        param: UpdateFeaturedAdParam,
    ) -> Result<entity::featured_ad::Model, DbErr> {
        let mut active: entity::featured_ad::ActiveModel = ad.into();

        if let Some(priority) = param.priority {
            active.priority = ActiveValue::Set(priority);
        }
        if let Some(expires_at) = param.expires_at {
            active.expires_at = ActiveValue::Set(expires_at);
        }
        if let Some(is_active) = param.active {
            active.active = ActiveValue::Set(is_active);
        }

        active.update(self.db).await
    }

    /// Deletes a featured ad.
    ///
    /// # Returns
    /// - `Ok(true)` - Row was deleted
    /// - `Ok(false)` - No ad with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, ad_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FeaturedAd::delete_by_id(ad_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deactivates every active ad whose expiry has passed.
    ///
    /// Run by the minute sweep job.
    ///
    /// # Arguments
    /// - `now` - The sweep timestamp
    ///
    /// # Returns
    /// - `Ok(count)` - Number of ads deactivated
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::FeaturedAd::update_many()
            .col_expr(entity::featured_ad::Column::Active, Expr::value(false))
            .filter(entity::featured_ad::Column::Active.eq(true))
            .filter(entity::featured_ad::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Field values for inserting a featured ad.
pub struct CreateFeaturedAdParam {
    pub listing_type: entity::featured_ad::ListingType,
    pub listing_id: i32,
    pub priority: i32,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Partial update for a featured ad.
pub struct UpdateFeaturedAdParam {
    pub priority: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}
