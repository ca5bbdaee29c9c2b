use super::*;
use crate::model::yard::DisplayStatus;
use entity::auction::AuctionStatus;

/// Tests the yard listing carries computed display buckets.
///
/// Expected: Ok(listing) with live and sold auctions bucketed correctly
#[tokio::test]
async fn buckets_auctions_for_display() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let yard = factory::yard::create_yard(db).await?;
    let seller = factory::user::create_user_with_role(db, "seller").await?;

    let car_live = factory::car::create_car(db, seller.id).await?;
    factory::auction::AuctionFactory::new(db, seller.id, car_live.id)
        .yard_id(Some(yard.id))
        .build()
        .await?;

    let car_sold = factory::car::create_car(db, seller.id).await?;
    factory::auction::AuctionFactory::new(db, seller.id, car_sold.id)
        .yard_id(Some(yard.id))
        .status(AuctionStatus::Sold)
        .build()
        .await?;

    let service = YardService::new(db, &cache);
    let listing = service.get_yard_auctions(yard.id).await?;

    assert_eq!(listing.len(), 2);
    let statuses: Vec<DisplayStatus> = listing.iter().map(|a| a.display_status).collect();
    assert!(statuses.contains(&DisplayStatus::Live));
    assert!(statuses.contains(&DisplayStatus::Sold));

    Ok(())
}

/// Tests a second lookup is served from the cache.
///
/// An auction added after the first call is invisible until the entry
/// expires or is invalidated.
///
/// Expected: stale listing until invalidation, fresh one after
#[tokio::test]
async fn serves_repeat_lookups_from_cache() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let yard = factory::yard::create_yard(db).await?;
    let seller = factory::user::create_user_with_role(db, "seller").await?;

    let service = YardService::new(db, &cache);
    assert!(service.get_yard_auctions(yard.id).await?.is_empty());

    let car = factory::car::create_car(db, seller.id).await?;
    factory::auction::AuctionFactory::new(db, seller.id, car.id)
        .yard_id(Some(yard.id))
        .build()
        .await?;

    assert!(service.get_yard_auctions(yard.id).await?.is_empty());

    cache.invalidate_prefix("auctions:");
    assert_eq!(service.get_yard_auctions(yard.id).await?.len(), 1);

    Ok(())
}

/// Tests an unknown yard is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_yard() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let service = YardService::new(db, &cache);
    let result = service.get_yard_auctions(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
