use super::*;
use entity::user::UserStatus;

/// Tests suspending an active account.
///
/// Expected: Ok(Some(User)) with the new status persisted
#[tokio::test]
async fn suspends_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_status(user.id, UserStatus::Suspended).await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().status, UserStatus::Suspended);

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.status, UserStatus::Suspended);

    Ok(())
}

/// Tests updating a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.set_status(404, UserStatus::Suspended).await?;

    assert!(updated.is_none());

    Ok(())
}
