use super::*;

fn params(bidder: UserIdent, amount: f64) -> AcceptSaleParams {
    AcceptSaleParams {
        bidder,
        amount,
        reason: None,
    }
}

/// Tests a successful sale flips the auction and its car to SOLD.
///
/// Verifies the full happy path: status transitions, the winning amount
/// recorded as the final price, the buyer recorded as highest bidder, and
/// the outcome carrying the buyer's public id.
///
/// Expected: Ok(SaleOutcome), auction and car SOLD
#[tokio::test]
async fn marks_auction_and_car_sold() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, car, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::create_user(db).await?;
    factory::bid::create_bid(db, auction.id, buyer.id, 13000.0).await?;

    let service = SaleService::new(db, &cache);
    let outcome = service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::PublicId(buyer.public_id), 13000.0),
        )
        .await?;

    assert_eq!(outcome.auction_id, auction.id);
    assert_eq!(outcome.winner_public_id, buyer.public_id);
    assert_eq!(outcome.winning_amount, 13000.0);

    let sold_auction = entity::prelude::Auction::find_by_id(auction.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(sold_auction.status, AuctionStatus::Sold);
    assert_eq!(sold_auction.current_price, 13000.0);
    assert_eq!(sold_auction.highest_bidder_id, Some(buyer.id));

    let sold_car = entity::prelude::Car::find_by_id(car.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(sold_car.status, CarStatus::Sold);

    Ok(())
}

/// Tests the sale's notification and conversation side effects.
///
/// Expected: one notification each for seller and buyer, and a
/// conversation thread carrying the supplied reason as subject
#[tokio::test]
async fn dispatches_notifications_and_opens_conversation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);
    service
        .accept_sale(
            auction.id,
            &seller,
            AcceptSaleParams {
                bidder: UserIdent::PublicId(buyer.public_id),
                amount: 12500.0,
                reason: Some("Agreed in person".to_string()),
            },
        )
        .await?;

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 2);
    let recipients: Vec<i32> = notifications.iter().map(|n| n.user_id).collect();
    assert!(recipients.contains(&seller.id));
    assert!(recipients.contains(&buyer.id));

    let conversations = entity::prelude::Conversation::find().all(db).await?;
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].auction_id, auction.id);
    assert_eq!(conversations[0].seller_id, seller.id);
    assert_eq!(conversations[0].buyer_id, buyer.id);
    assert_eq!(conversations[0].subject, "Agreed in person");

    Ok(())
}

/// Tests a sale can be accepted after the auction has ended.
///
/// ENDED is still inside the allow-list; only SOLD and CANCELLED are
/// terminal for sale acceptance.
///
/// Expected: Ok(SaleOutcome)
#[tokio::test]
async fn accepts_sale_on_ended_auction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let seller = factory::user::create_user_with_role(db, "seller").await?;
    let car = factory::car::create_car(db, seller.id).await?;
    let auction = factory::auction::AuctionFactory::new(db, seller.id, car.id)
        .status(AuctionStatus::Ended)
        .build()
        .await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);
    let result = service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::PublicId(buyer.public_id), 11000.0),
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests terminal statuses reject the sale.
///
/// Expected: Err(SaleError::NotActive) carrying the current status
#[tokio::test]
async fn rejects_sold_and_cancelled_auctions() -> Result<(), AppError> {
    for (status, label) in [
        (AuctionStatus::Sold, "SOLD"),
        (AuctionStatus::Cancelled, "CANCELLED"),
    ] {
        let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = ListingCache::new(60);

        let seller = factory::user::create_user_with_role(db, "seller").await?;
        let car = factory::car::create_car(db, seller.id).await?;
        let auction = factory::auction::AuctionFactory::new(db, seller.id, car.id)
            .status(status)
            .build()
            .await?;
        let buyer = factory::user::create_user(db).await?;

        let service = SaleService::new(db, &cache);
        let result = service
            .accept_sale(
                auction.id,
                &seller,
                params(UserIdent::PublicId(buyer.public_id), 11000.0),
            )
            .await;

        match result.unwrap_err() {
            AppError::SaleErr(SaleError::NotActive { status }) => {
                assert_eq!(status, label);
            }
            e => panic!("Expected NotActive error, got: {:?}", e),
        }
    }

    Ok(())
}

/// Tests only the auction's seller may accept its sale.
///
/// Expected: Err(SaleError::NotSeller) naming the caller
#[tokio::test]
async fn rejects_caller_who_is_not_the_seller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (_, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let impostor = factory::user::create_user_with_role(db, "seller").await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);
    let result = service
        .accept_sale(
            auction.id,
            &impostor,
            params(UserIdent::PublicId(buyer.public_id), 11000.0),
        )
        .await;

    match result.unwrap_err() {
        AppError::SaleErr(SaleError::NotSeller(user_id)) => {
            assert_eq!(user_id, impostor.id);
        }
        e => panic!("Expected NotSeller error, got: {:?}", e),
    }

    Ok(())
}

/// Tests an unknown auction id is reported before any other check.
///
/// Expected: Err(SaleError::AuctionNotFound)
#[tokio::test]
async fn rejects_unknown_auction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let seller = factory::user::create_user_with_role(db, "seller").await?;

    let service = SaleService::new(db, &cache);
    let result = service
        .accept_sale(404, &seller, params(UserIdent::PublicId(1), 11000.0))
        .await;

    match result.unwrap_err() {
        AppError::SaleErr(SaleError::AuctionNotFound(auction_id)) => {
            assert_eq!(auction_id, 404);
        }
        e => panic!("Expected AuctionNotFound error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a bidder identifier matching no user is rejected.
///
/// Expected: Err(SaleError::BuyerNotFound)
#[tokio::test]
async fn rejects_unknown_buyer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;

    let service = SaleService::new(db, &cache);
    let result = service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::ExternalId("no-such-buyer".to_string()), 11000.0),
        )
        .await;

    match result.unwrap_err() {
        AppError::SaleErr(SaleError::BuyerNotFound) => {}
        e => panic!("Expected BuyerNotFound error, got: {:?}", e),
    }

    Ok(())
}

/// Tests amount validation rejects zero, negative, and non-finite values.
///
/// Expected: Err(SaleError::InvalidAmount) for each
#[tokio::test]
async fn rejects_non_positive_amounts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);

    for amount in [0.0, -500.0, f64::NAN, f64::INFINITY] {
        let result = service
            .accept_sale(
                auction.id,
                &seller,
                params(UserIdent::PublicId(buyer.public_id), amount),
            )
            .await;

        match result.unwrap_err() {
            AppError::SaleErr(SaleError::InvalidAmount) => {}
            e => panic!("Expected InvalidAmount for {}, got: {:?}", amount, e),
        }
    }

    // Nothing committed along the way
    let auction = entity::prelude::Auction::find_by_id(auction.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(auction.status, AuctionStatus::Active);

    Ok(())
}

/// Tests the buyer may be referenced by the legacy external id.
///
/// Expected: Ok(SaleOutcome) resolving the same account
#[tokio::test]
async fn resolves_buyer_by_external_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::UserFactory::new(db)
        .external_id("legacy-buyer-9")
        .build()
        .await?;

    let service = SaleService::new(db, &cache);
    let outcome = service
        .accept_sale(
            auction.id,
            &seller,
            params(
                UserIdent::ExternalId("legacy-buyer-9".to_string()),
                11000.0,
            ),
        )
        .await?;

    assert_eq!(outcome.winner_public_id, buyer.public_id);

    Ok(())
}

/// Tests an off-book sale to a user with no recorded bid still commits.
///
/// The bid cross-check is advisory only.
///
/// Expected: Ok(SaleOutcome)
#[tokio::test]
async fn accepts_buyer_without_recorded_bid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);
    let result = service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::PublicId(buyer.public_id), 9000.0),
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests side effect failures never roll back the committed sale.
///
/// The schema is built without the notification and conversation tables,
/// so both post-commit side effects fail at the database layer.
///
/// Expected: Ok(SaleOutcome) with the auction SOLD regardless
#[tokio::test]
async fn side_effect_failure_does_not_fail_the_sale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Yard)
        .with_table(entity::prelude::Car)
        .with_table(entity::prelude::Auction)
        .with_table(entity::prelude::Bid)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);
    let result = service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::PublicId(buyer.public_id), 11000.0),
        )
        .await;

    assert!(result.is_ok());

    let sold = entity::prelude::Auction::find_by_id(auction.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(sold.status, AuctionStatus::Sold);

    Ok(())
}

/// Tests accepting a sale twice fails the second time.
///
/// The first accept moves the auction to SOLD, which is outside the
/// allow-list for the second.
///
/// Expected: first Ok, second Err(SaleError::NotActive)
#[tokio::test]
async fn second_accept_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sale_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ListingCache::new(60);

    let (seller, _, auction) = factory::helpers::create_auction_with_dependencies(db).await?;
    let buyer = factory::user::create_user(db).await?;

    let service = SaleService::new(db, &cache);

    service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::PublicId(buyer.public_id), 11000.0),
        )
        .await?;

    let result = service
        .accept_sale(
            auction.id,
            &seller,
            params(UserIdent::PublicId(buyer.public_id), 12000.0),
        )
        .await;

    match result.unwrap_err() {
        AppError::SaleErr(SaleError::NotActive { status }) => {
            assert_eq!(status, "SOLD");
        }
        e => panic!("Expected NotActive error, got: {:?}", e),
    }

    Ok(())
}
