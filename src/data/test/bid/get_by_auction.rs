use super::*;

/// Tests bid history is ordered by amount descending.
///
/// Expected: Ok(bids) highest amount first
#[tokio::test]
async fn returns_bids_highest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let bidder = factory::user::create_user(db).await?;

    factory::bid::create_bid(db, auction.id, bidder.id, 10500.0).await?;
    factory::bid::create_bid(db, auction.id, bidder.id, 12000.0).await?;
    factory::bid::create_bid(db, auction.id, bidder.id, 11000.0).await?;

    let repo = BidRepository::new(db);
    let bids = repo.get_by_auction(auction.id).await?;

    let amounts: Vec<f64> = bids.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![12000.0, 11000.0, 10500.0]);

    Ok(())
}

/// Tests an auction with no bids yields an empty history.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_without_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;

    let repo = BidRepository::new(db);
    assert!(repo.get_by_auction(auction.id).await?.is_empty());

    Ok(())
}
