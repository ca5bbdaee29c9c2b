use super::*;
use entity::user::UserStatus;

/// Tests inserting a new account.
///
/// Expected: Ok(User) active with a zero balance
#[tokio::test]
async fn creates_active_user_with_zero_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            public_id: 12345678,
            external_id: "admin-12345678".to_string(),
            email: "root@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHRzYWx0c2FsdA$hash".to_string(),
            name: "Root".to_string(),
            role: "admin".to_string(),
        })
        .await?;

    assert_eq!(user.public_id, 12345678);
    assert_eq!(user.role, "admin");
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.wallet_balance, 0.0);

    Ok(())
}

/// Tests duplicate emails are rejected by the unique constraint.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            public_id: 999,
            external_id: "ext-dup".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Dup".to_string(),
            role: "buyer".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
