use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the token is valid, the
/// user exists in the database, and has the admin role.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens.issue(admin.id)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());
    let returned = result.unwrap();
    assert_eq!(returned.id, admin.id);
    assert!(returned.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when the user is authenticated
/// and exists in the database but only has the user role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("RegularUser")
        .admin(false)
        .build()
        .await?;

    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens.issue(user.id)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the admin check runs after authentication.
///
/// Verifies that an unauthenticated request to an admin route reports the
/// missing token rather than a permission failure.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn reports_missing_token_before_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}
