use super::*;
use chrono::{Duration, Utc};

/// Tests yard listings are scoped to the yard and ordered by start date.
///
/// Expected: only the yard's auctions, soonest start first
#[tokio::test]
async fn returns_yard_auctions_in_start_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let yard = factory::yard::create_yard(db).await?;
    let other_yard = factory::yard::create_yard(db).await?;
    let seller = factory::user::create_user_with_role(db, "seller").await?;

    let now = Utc::now();

    let car_late = factory::car::create_car(db, seller.id).await?;
    let late = factory::auction::AuctionFactory::new(db, seller.id, car_late.id)
        .yard_id(Some(yard.id))
        .start_date(now + Duration::hours(2))
        .end_date(now + Duration::hours(4))
        .build()
        .await?;

    let car_early = factory::car::create_car(db, seller.id).await?;
    let early = factory::auction::AuctionFactory::new(db, seller.id, car_early.id)
        .yard_id(Some(yard.id))
        .start_date(now - Duration::hours(2))
        .end_date(now + Duration::hours(1))
        .build()
        .await?;

    let car_elsewhere = factory::car::create_car(db, seller.id).await?;
    factory::auction::AuctionFactory::new(db, seller.id, car_elsewhere.id)
        .yard_id(Some(other_yard.id))
        .build()
        .await?;

    let repo = AuctionRepository::new(db);
    let auctions = repo.get_by_yard(yard.id).await?;

    assert_eq!(auctions.len(), 2);
    assert_eq!(auctions[0].id, early.id);
    assert_eq!(auctions[1].id, late.id);

    Ok(())
}

/// Tests the auction to yard relation resolves in both directions.
///
/// Expected: an auction's related yard is the one it was listed at
#[tokio::test]
async fn auction_links_back_to_its_yard() -> Result<(), DbErr> {
    use sea_orm::ModelTrait;

    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let yard = factory::yard::create_yard(db).await?;
    let seller = factory::user::create_user_with_role(db, "seller").await?;
    let car = factory::car::create_car(db, seller.id).await?;
    let auction = factory::auction::AuctionFactory::new(db, seller.id, car.id)
        .yard_id(Some(yard.id))
        .build()
        .await?;

    let linked = auction.find_related(entity::prelude::Yard).one(db).await?;
    assert_eq!(linked.map(|y| y.id), Some(yard.id));

    Ok(())
}

/// Tests a yard with no auctions yields an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_empty_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let yard = factory::yard::create_yard(db).await?;

    let repo = AuctionRepository::new(db);
    let auctions = repo.get_by_yard(yard.id).await?;

    assert!(auctions.is_empty());

    Ok(())
}
