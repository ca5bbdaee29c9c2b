use super::*;

mod require_admin;

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);

    Ok(())
}

/// Tests an anonymous session is rejected.
///
/// Verifies that a session with no stored user id fails even the empty
/// permission check.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn anonymous_session_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::NotLoggedIn) => {}
        e => panic!("Expected NotLoggedIn error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a session pointing at a deleted account is rejected.
///
/// Verifies that a stale session whose user row no longer exists does not
/// grant access.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn stale_session_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(9999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 9999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a suspended account is rejected regardless of role.
///
/// Verifies that suspension blocks access before any permission check,
/// even for an admin-roled account with no required permissions.
///
/// Expected: Err(AuthError::Suspended)
#[tokio::test]
async fn suspended_account_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("admin")
        .status(entity::user::UserStatus::Suspended)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::Suspended(user_id)) => {
            assert_eq!(user_id, user.id);
        }
        e => panic!("Expected Suspended error, got: {:?}", e),
    }

    Ok(())
}

/// Tests multiple permissions are all checked.
///
/// Verifies that when multiple permissions are required, all of them
/// must be satisfied for access to be granted.
///
/// Expected: Ok(User) when all permissions are met
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Sellers hold both of these permissions
    let user = factory::user::create_user_with_role(db, "seller").await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[
            Permission::Allow("auctions.manage"),
            Permission::Allow("auctions.accept_sale"),
        ])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that when checking multiple permissions, if the user lacks
/// any one of them, access is denied.
///
/// Expected: Err(AuthError::AccessDenied) for the first failed permission
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Sellers can accept sales but cannot view accounts
    let user = factory::user::create_user_with_role(db, "seller").await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[
            Permission::Allow("auctions.accept_sale"),
            Permission::Allow("users.view"),
        ])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("users.view"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
