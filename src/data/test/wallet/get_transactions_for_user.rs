use super::*;
use chrono::Utc;
use entity::wallet_transaction::TransactionKind;
use sea_orm::{ActiveModelTrait, ActiveValue};

async fn insert_entry(
    db: &sea_orm::DatabaseConnection,
    user_id: i32,
    amount: f64,
    created_at: chrono::DateTime<Utc>,
) -> Result<entity::wallet_transaction::Model, DbErr> {
    entity::wallet_transaction::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        amount: ActiveValue::Set(amount),
        kind: ActiveValue::Set(TransactionKind::Recharge),
        reference: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}

/// Tests the ledger is scoped to the user and ordered newest first.
///
/// Expected: only the user's entries, most recent first
#[tokio::test]
async fn returns_user_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let now = Utc::now();
    let older = insert_entry(db, user.id, 50.0, now - chrono::Duration::hours(2)).await?;
    let newer = insert_entry(db, user.id, 75.0, now).await?;
    insert_entry(db, other.id, 500.0, now).await?;

    let repo = WalletRepository::new(db);
    let entries = repo.get_transactions_for_user(user.id).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, newer.id);
    assert_eq!(entries[1].id, older.id);

    Ok(())
}

/// Tests a user with no ledger entries gets an empty history.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = WalletRepository::new(db);
    assert!(repo.get_transactions_for_user(user.id).await?.is_empty());

    Ok(())
}
