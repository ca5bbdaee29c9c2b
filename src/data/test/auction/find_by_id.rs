use super::*;

/// Tests finding an existing auction by id.
///
/// Expected: Ok(Some(Auction)) with matching data
#[tokio::test]
async fn finds_existing_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, car, auction) = factory::helpers::create_auction_with_dependencies(db).await?;

    let repo = AuctionRepository::new(db);
    let found = repo.find_by_id(auction.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.seller_id, seller.id);
    assert_eq!(found.car_id, car.id);

    Ok(())
}

/// Tests querying for a non-existent auction.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuctionRepository::new(db);
    assert!(repo.find_by_id(404).await?.is_none());

    Ok(())
}
