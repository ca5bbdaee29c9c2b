use super::*;

/// Tests detection of an existing admin account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_when_admin_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "admin").await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests an empty or admin-free database reports no admin.
///
/// Only the canonical role name counts at seed time; aliased roles are
/// normalized at login instead.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_canonical_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::user::create_user_with_role(db, "seller").await?;
    factory::user::create_user_with_role(db, "administrator").await?;

    assert!(!repo.admin_exists().await?);

    Ok(())
}
