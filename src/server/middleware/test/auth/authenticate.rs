use super::*;

/// Tests authenticating with a valid token.
///
/// Expected: Ok(CurrentUser) with permissions read from the database
#[tokio::test]
async fn resolves_token_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "admin.user").await?;
    let token = token_for(&user);

    let current = AuthGuard::new(db, &token).authenticate().await?;

    assert_eq!(current.uid(), user.uid);
    assert_eq!(current.permissions, vec!["admin.user".to_string()]);

    Ok(())
}

/// Tests that a request without a token is rejected.
///
/// Expected: Err(AuthError::MissingToken), and `optional` yields None
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = AuthToken::default();
    let guard = AuthGuard::new(db, &token);

    assert!(matches!(
        guard.authenticate().await,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
    assert!(guard.optional().await?.is_none());

    Ok(())
}

/// Tests that deactivated users cannot authenticate.
///
/// Expected: Err(AuthError::UserDeactivated)
#[tokio::test]
async fn rejects_deactivated_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let token = token_for(&user);

    let result = AuthGuard::new(db, &token).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserDeactivated(_)))
    ));

    Ok(())
}

/// Tests a token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_vanished_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = token_for(&user);
    crate::server::data::user::UserRepository::new(db)
        .delete(user.uid)
        .await?;

    let result = AuthGuard::new(db, &token).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}
