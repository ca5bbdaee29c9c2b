use super::*;
use entity::withdrawal::WithdrawalStatus;

/// Tests filing a withdrawal within the current balance.
///
/// Funds stay in the wallet until approval.
///
/// Expected: Ok(withdrawal) pending, balance untouched
#[tokio::test]
async fn files_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .wallet_balance(200.0)
        .build()
        .await?;

    let service = WalletService::new(db);
    let withdrawal = service.request_withdrawal(&user, 150.0).await?;

    assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
    assert_eq!(withdrawal.amount, 150.0);

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.wallet_balance, 200.0);

    Ok(())
}

/// Tests non-positive amounts are rejected.
///
/// Expected: Err(AppError::BadRequest) for each
#[tokio::test]
async fn rejects_non_positive_amounts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .wallet_balance(200.0)
        .build()
        .await?;

    let service = WalletService::new(db);

    for amount in [0.0, -20.0, f64::NAN] {
        let result = service.request_withdrawal(&user, amount).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "amount {} should be rejected",
            amount
        );
    }

    Ok(())
}

/// Tests requests exceeding the balance are rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_amount_over_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .wallet_balance(50.0)
        .build()
        .await?;

    let service = WalletService::new(db);
    let result = service.request_withdrawal(&user, 50.01).await;

    match result.unwrap_err() {
        AppError::BadRequest(msg) => assert!(msg.contains("balance")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}
