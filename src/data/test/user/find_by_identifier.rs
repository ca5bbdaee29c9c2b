use super::*;

/// Tests numeric identifiers resolve against the public id.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_user_by_public_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .public_id(5_000_001)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_identifier(&UserIdent::PublicId(5_000_001))
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    Ok(())
}

/// Tests string identifiers resolve against the legacy external id.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_user_by_external_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .external_id("legacy-77")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_identifier(&UserIdent::ExternalId("legacy-77".to_string()))
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    Ok(())
}

/// Tests an unknown identifier resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo
        .find_by_identifier(&UserIdent::PublicId(424242))
        .await?
        .is_none());
    assert!(repo
        .find_by_identifier(&UserIdent::ExternalId("no-such-user".to_string()))
        .await?
        .is_none());

    Ok(())
}
