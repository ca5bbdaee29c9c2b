use super::*;

/// Tests detection of a recorded bid from a specific user.
///
/// Expected: Ok(true) for the bidder, Ok(false) for a bystander
#[tokio::test]
async fn detects_bid_from_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let bidder = factory::user::create_user(db).await?;
    let bystander = factory::user::create_user(db).await?;

    factory::bid::create_bid(db, auction.id, bidder.id, 11000.0).await?;

    let repo = BidRepository::new(db);
    assert!(repo.has_bid_from(auction.id, bidder.id).await?);
    assert!(!repo.has_bid_from(auction.id, bystander.id).await?);

    Ok(())
}

/// Tests bids on other auctions are not counted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn scoped_to_the_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let (_, other_auction) = factory::helpers::create_auction_for_seller(db, &seller).await?;
    let bidder = factory::user::create_user(db).await?;

    factory::bid::create_bid(db, other_auction.id, bidder.id, 11000.0).await?;

    let repo = BidRepository::new(db);
    assert!(!repo.has_bid_from(auction.id, bidder.id).await?);

    Ok(())
}
