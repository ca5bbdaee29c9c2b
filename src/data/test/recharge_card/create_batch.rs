use super::*;
use entity::recharge_card::CardStatus;

/// Tests a batch insert creates one unused card per code.
///
/// Expected: Ok(cards) in insertion order, all unused with the shared value
#[tokio::test]
async fn creates_unused_cards_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RechargeCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RechargeCardRepository::new(db);
    let codes = vec![
        "AY-AAAA-BBBB-CCCC".to_string(),
        "AY-DDDD-EEEE-FFFF".to_string(),
    ];

    let cards = repo.create_batch(codes.clone(), 50.0).await?;

    assert_eq!(cards.len(), 2);
    for (card, code) in cards.iter().zip(&codes) {
        assert_eq!(&card.code, code);
        assert_eq!(card.amount, 50.0);
        assert_eq!(card.status, CardStatus::Unused);
        assert!(card.redeemed_by.is_none());
    }

    Ok(())
}

/// Tests duplicate codes violate the unique constraint.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RechargeCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RechargeCardRepository::new(db);
    repo.create_batch(vec!["AY-AAAA-BBBB-CCCC".to_string()], 50.0)
        .await?;

    let result = repo
        .create_batch(vec!["AY-AAAA-BBBB-CCCC".to_string()], 75.0)
        .await;

    assert!(result.is_err());

    Ok(())
}
