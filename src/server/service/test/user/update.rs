use super::*;

/// Tests a non-admin trying to deactivate a user.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn active_flag_requires_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.uid,
            UpdateUserParams {
                nickname: None,
                active: Some(false),
            },
            false,
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that nicknames are trimmed and may not be blank.
///
/// Expected: Ok with trimmed nickname, Err(AppError::BadRequest) for whitespace
#[tokio::test]
async fn trims_and_rejects_blank_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    let updated = service
        .update(
            user.uid,
            UpdateUserParams {
                nickname: Some("  Viper  ".to_string()),
                active: None,
            },
            false,
        )
        .await?;
    assert_eq!(updated.nickname, "Viper");

    let result = service
        .update(
            user.uid,
            UpdateUserParams {
                nickname: Some("   ".to_string()),
                active: None,
            },
            true,
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
