//! Yard listing assembly.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    data::{auction::AuctionRepository, yard::YardRepository},
    error::AppError,
    model::yard::YardAuctionDto,
    service::cache::ListingCache,
};

pub struct YardService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> YardService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    /// Gets a yard's auctions with their display buckets, via the listing
    /// cache.
    ///
    /// Cached payloads carry the display status computed at cache time; the
    /// TTL bounds how stale a bucket can get between sweeps.
    ///
    /// # Returns
    /// - `Ok(auctions)` - Possibly empty listing
    /// - `Err(AppError::NotFound(_))` - No yard with that id
    /// - `Err(AppError::DbErr(_))` - Database failure
    pub async fn get_yard_auctions(&self, yard_id: i32) -> Result<Vec<YardAuctionDto>, AppError> {
        let cache_key = format!("auctions:yard:{}", yard_id);

        if let Some(cached) = self.cache.get(&cache_key) {
            if let Ok(listing) = serde_json::from_value::<Vec<YardAuctionDto>>(cached) {
                debug!("yard {}: listing served from cache", yard_id);
                return Ok(listing);
            }
        }

        if YardRepository::new(self.db)
            .find_by_id(yard_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Yard {} not found", yard_id)));
        }

        let auctions = AuctionRepository::new(self.db).get_by_yard(yard_id).await?;

        let now = Utc::now();
        let listing: Vec<YardAuctionDto> = auctions
            .into_iter()
            .map(|auction| YardAuctionDto::from_model(auction, now))
            .collect();

        if let Ok(value) = serde_json::to_value(&listing) {
            self.cache.put(cache_key, value);
        }

        Ok(listing)
    }
}
