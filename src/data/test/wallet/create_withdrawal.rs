use super::*;
use entity::withdrawal::WithdrawalStatus;

/// Tests filing a withdrawal request.
///
/// Expected: Ok(withdrawal) pending and unreviewed
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = WalletRepository::new(db);
    let withdrawal = repo.create_withdrawal(user.id, 120.0).await?;

    assert_eq!(withdrawal.user_id, user.id);
    assert_eq!(withdrawal.amount, 120.0);
    assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
    assert!(withdrawal.reviewed_by.is_none());
    assert!(withdrawal.reviewed_at.is_none());

    Ok(())
}
