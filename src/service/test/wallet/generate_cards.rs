use super::*;
use entity::recharge_card::CardStatus;
use std::collections::HashSet;

/// Tests minting a batch of cards with unique codes.
///
/// Expected: Ok(cards) of the requested size, all unused, codes distinct
#[tokio::test]
async fn mints_requested_batch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = WalletService::new(db);
    let cards = service.generate_cards(5, 25.0).await?;

    assert_eq!(cards.len(), 5);

    let codes: HashSet<&str> = cards.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes.len(), 5);

    for card in &cards {
        assert_eq!(card.amount, 25.0);
        assert_eq!(card.status, CardStatus::Unused);
        assert!(card.code.starts_with("AY-"));
    }

    Ok(())
}

/// Tests batch size limits.
///
/// Expected: Err(AppError::BadRequest) for zero and oversized batches
#[tokio::test]
async fn rejects_invalid_batch_sizes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = WalletService::new(db);

    assert!(matches!(
        service.generate_cards(0, 25.0).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.generate_cards(501, 25.0).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests face value validation.
///
/// Expected: Err(AppError::BadRequest) for non-positive values
#[tokio::test]
async fn rejects_non_positive_value() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = WalletService::new(db);

    for amount in [0.0, -5.0, f64::NAN] {
        assert!(
            matches!(
                service.generate_cards(3, amount).await,
                Err(AppError::BadRequest(_))
            ),
            "value {} should be rejected",
            amount
        );
    }

    Ok(())
}
