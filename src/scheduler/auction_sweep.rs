use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{data::featured_ad::FeaturedAdRepository, error::AppError};

/// Starts the auction sweep scheduler.
///
/// Runs every minute and performs three date-driven bulk transitions:
/// - UPCOMING auctions whose start date has passed become ACTIVE
/// - ACTIVE auctions whose end date has passed become ENDED
/// - Active featured ads past their expiry are deactivated
///
/// SOLD and CANCELLED auctions are terminal and never touched; the ENDED
/// state still allows a late sale acceptance, so the sweep does not finalize
/// anything irreversibly.
///
/// # Arguments
/// - `db` - Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep(&db).await {
                error!("Error running auction sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Auction sweep scheduler started");

    Ok(())
}

/// Runs one sweep pass. Exposed separately so tests can drive a pass directly.
pub async fn sweep(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Utc::now();

    let activated = entity::prelude::Auction::update_many()
        .col_expr(
            entity::auction::Column::Status,
            Expr::value(entity::auction::AuctionStatus::Active),
        )
        .filter(entity::auction::Column::Status.eq(entity::auction::AuctionStatus::Upcoming))
        .filter(entity::auction::Column::StartDate.lte(now))
        .filter(entity::auction::Column::EndDate.gt(now))
        .exec(db)
        .await?;

    let ended = entity::prelude::Auction::update_many()
        .col_expr(
            entity::auction::Column::Status,
            Expr::value(entity::auction::AuctionStatus::Ended),
        )
        .filter(
            entity::auction::Column::Status
                .is_in([
                    entity::auction::AuctionStatus::Upcoming,
                    entity::auction::AuctionStatus::Active,
                ]),
        )
        .filter(entity::auction::Column::EndDate.lte(now))
        .exec(db)
        .await?;

    let expired_ads = FeaturedAdRepository::new(db).deactivate_expired(now).await?;

    if activated.rows_affected > 0 || ended.rows_affected > 0 || expired_ads > 0 {
        info!(
            "sweep: {} auctions activated, {} ended, {} featured ads expired",
            activated.rows_affected, ended.rows_affected, expired_ads
        );
    }

    Ok(())
}
