//! Sale acceptance flow.
//!
//! Accepting a sale is the one transition that crosses aggregate boundaries:
//! the auction and its car flip to SOLD atomically, then cache invalidation,
//! notifications, and the sale conversation run as best-effort side effects
//! that never roll back the committed sale.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{debug, warn};

use crate::{
    data::{auction::AuctionRepository, bid::BidRepository, user::UserRepository},
    error::{internal::InternalError, sale::SaleError, AppError},
    model::auction::{AcceptSaleParams, SaleOutcome},
    service::{cache::ListingCache, conversation::ConversationService, notification::NotificationService},
};

pub struct SaleService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> SaleService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    /// Accepts a sale on behalf of the auction's seller.
    ///
    /// Validation order matters for the error contract: amount validity,
    /// auction existence, seller ownership, buyer resolution, then the
    /// status allow-list (UPCOMING, ACTIVE, ENDED). On success the auction
    /// and its car are marked SOLD in one transaction; side effects after
    /// the commit are logged on failure but never fail the request.
    ///
    /// # Arguments
    /// - `auction_id` - The auction being sold
    /// - `caller` - The authenticated user, required to be the seller
    /// - `params` - Winning bidder identifier, amount, and optional reason
    ///
    /// # Returns
    /// - `Ok(SaleOutcome)` - Sale committed
    /// - `Err(AppError::SaleErr(_))` - Any contract violation
    /// - `Err(AppError::DbErr(_))` - Database failure before or during commit
    pub async fn accept_sale(
        &self,
        auction_id: i32,
        caller: &entity::user::Model,
        params: AcceptSaleParams,
    ) -> Result<SaleOutcome, AppError> {
        if !params.amount.is_finite() || params.amount <= 0.0 {
            return Err(SaleError::InvalidAmount.into());
        }

        let auction = AuctionRepository::new(self.db)
            .find_by_id(auction_id)
            .await?
            .ok_or(SaleError::AuctionNotFound(auction_id))?;

        if auction.seller_id != caller.id {
            return Err(SaleError::NotSeller(caller.id).into());
        }

        let buyer = UserRepository::new(self.db)
            .find_by_identifier(&params.bidder)
            .await?
            .ok_or(SaleError::BuyerNotFound)?;

        if !auction.status.accepts_sale() {
            return Err(SaleError::NotActive {
                status: auction.status.as_str().to_string(),
            }
            .into());
        }

        // The seller's word on the winning amount is trusted; a missing bid
        // is only advisory and must not block an off-book sale.
        match BidRepository::new(self.db)
            .has_bid_from(auction_id, buyer.id)
            .await
        {
            Ok(true) => {}
            Ok(false) => warn!(
                "auction {}: accepting sale to user {} who has no recorded bid",
                auction_id, buyer.id
            ),
            Err(err) => warn!(
                "auction {}: bid cross-check failed, continuing: {}",
                auction_id, err
            ),
        }

        let ended_at = chrono::Utc::now();
        let car_id = auction.car_id;

        let txn = self.db.begin().await?;

        let car = entity::prelude::Car::find_by_id(car_id)
            .one(&txn)
            .await?
            .ok_or(InternalError::MissingCar { auction_id })?;

        let mut auction_active: entity::auction::ActiveModel = auction.into();
        auction_active.status = ActiveValue::Set(entity::auction::AuctionStatus::Sold);
        auction_active.current_price = ActiveValue::Set(params.amount);
        auction_active.highest_bidder_id = ActiveValue::Set(Some(buyer.id));
        auction_active.end_date = ActiveValue::Set(ended_at);
        auction_active.update(&txn).await?;

        let mut car_active: entity::car::ActiveModel = car.into();
        car_active.status = ActiveValue::Set(entity::car::CarStatus::Sold);
        car_active.update(&txn).await?;

        txn.commit().await?;

        let dropped = self.cache.invalidate_prefix("auctions:");
        debug!(
            "auction {}: sale committed, {} cached listings invalidated",
            auction_id, dropped
        );

        if let Err(err) = NotificationService::new(self.db)
            .sale_completed(auction_id, caller, &buyer, params.amount)
            .await
        {
            warn!(
                "auction {}: sale notification dispatch failed: {}",
                auction_id, err
            );
        }

        if let Err(err) = ConversationService::new(self.db)
            .open_sale_thread(auction_id, caller.id, buyer.id, params.reason.as_deref())
            .await
        {
            warn!(
                "auction {}: sale conversation creation failed: {}",
                auction_id, err
            );
        }

        Ok(SaleOutcome {
            auction_id,
            winner_public_id: buyer.public_id,
            winning_amount: params.amount,
            ended_at,
        })
    }
}
