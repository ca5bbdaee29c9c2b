use super::*;

/// Tests admin-roled user passes the admin requirement.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_role_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, admin.id);

    Ok(())
}

/// Tests legacy admin role aliases pass the admin requirement.
///
/// Role strings are normalized before the check, so accounts imported with
/// aliased role names keep their access.
///
/// Expected: Ok(User) for each alias
#[tokio::test]
async fn admin_aliases_grant_access() -> Result<(), AppError> {
    for alias in ["administrator", "superadmin", "ADMIN "] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let admin = factory::user::create_user_with_role(db, alias).await?;

        let auth_session = AuthSession::new(session);
        auth_session.set_user_id(admin.id).await?;

        let auth_guard = AuthGuard::new(db, session);
        let result = auth_guard.require(&[Permission::Admin]).await;

        assert!(result.is_ok(), "alias '{}' should grant admin", alias);
    }

    Ok(())
}

/// Tests non-admin roles fail the admin requirement.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn non_admin_role_is_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "seller").await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("admin"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
