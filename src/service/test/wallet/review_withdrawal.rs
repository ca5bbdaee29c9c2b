use super::*;
use crate::data::wallet::WalletRepository;
use entity::wallet_transaction::TransactionKind;
use entity::withdrawal::WithdrawalStatus;

/// Tests approval debits the wallet and writes the ledger entry.
///
/// Expected: Ok(withdrawal) approved, balance reduced, negative ledger row
#[tokio::test]
async fn approval_debits_wallet_and_writes_ledger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let user = factory::user::UserFactory::new(db)
        .wallet_balance(300.0)
        .build()
        .await?;
    let withdrawal = WalletRepository::new(db)
        .create_withdrawal(user.id, 120.0)
        .await?;

    let service = WalletService::new(db);
    let reviewed = service
        .review_withdrawal(&admin, withdrawal.id, true, Some("paid out".to_string()))
        .await?;

    assert_eq!(reviewed.status, WithdrawalStatus::Approved);
    assert_eq!(reviewed.reviewed_by, Some(admin.id));
    assert!(reviewed.reviewed_at.is_some());
    assert_eq!(reviewed.note.as_deref(), Some("paid out"));

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.wallet_balance, 180.0);

    let entries = WalletRepository::new(db)
        .get_transactions_for_user(user.id)
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, -120.0);
    assert_eq!(entries[0].kind, TransactionKind::Withdrawal);

    Ok(())
}

/// Tests rejection leaves the wallet untouched.
///
/// Expected: Ok(withdrawal) rejected, balance and ledger unchanged
#[tokio::test]
async fn rejection_leaves_wallet_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let user = factory::user::UserFactory::new(db)
        .wallet_balance(300.0)
        .build()
        .await?;
    let withdrawal = WalletRepository::new(db)
        .create_withdrawal(user.id, 120.0)
        .await?;

    let service = WalletService::new(db);
    let reviewed = service
        .review_withdrawal(&admin, withdrawal.id, false, None)
        .await?;

    assert_eq!(reviewed.status, WithdrawalStatus::Rejected);

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.wallet_balance, 300.0);

    let entries = WalletRepository::new(db)
        .get_transactions_for_user(user.id)
        .await?;
    assert!(entries.is_empty());

    Ok(())
}

/// Tests a request cannot be reviewed twice.
///
/// Expected: Err(AppError::BadRequest) on the second review
#[tokio::test]
async fn rejects_double_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let user = factory::user::UserFactory::new(db)
        .wallet_balance(300.0)
        .build()
        .await?;
    let withdrawal = WalletRepository::new(db)
        .create_withdrawal(user.id, 100.0)
        .await?;

    let service = WalletService::new(db);
    service
        .review_withdrawal(&admin, withdrawal.id, false, None)
        .await?;

    let result = service
        .review_withdrawal(&admin, withdrawal.id, true, None)
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(msg) => assert!(msg.contains("already")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests approval fails when the balance has shrunk since the request.
///
/// The balance is re-read inside the transaction, so spending between
/// request and review can invalidate an otherwise sound approval.
///
/// Expected: Err(AppError::BadRequest), request still pending
#[tokio::test]
async fn approval_rechecks_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let user = factory::user::UserFactory::new(db)
        .wallet_balance(30.0)
        .build()
        .await?;

    // Request filed against a balance that no longer exists
    let withdrawal = WalletRepository::new(db)
        .create_withdrawal(user.id, 100.0)
        .await?;

    let service = WalletService::new(db);
    let result = service
        .review_withdrawal(&admin, withdrawal.id, true, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = WalletRepository::new(db)
        .find_withdrawal(withdrawal.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, WithdrawalStatus::Pending);

    Ok(())
}

/// Tests reviewing a non-existent request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_withdrawal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;

    let service = WalletService::new(db);
    let result = service.review_withdrawal(&admin, 404, true, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
