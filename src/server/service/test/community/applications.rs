use super::*;

/// Tests applying twice to the same community.
///
/// Expected: Ok, then Err(AppError::Conflict)
#[tokio::test]
async fn rejects_second_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let community = factory::create_community(db).await?;
    let user = factory::create_user(db).await?;
    let applicant = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();
    let service = CommunityService::new(db);

    let application = service
        .apply(&community.slug, &applicant, Some("Let me in".to_string()))
        .await?;
    assert_eq!(application.status, ApplicationStatus::Submitted);

    let result = service.apply(&community.slug, &applicant, None).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests approving an application.
///
/// Expected: Ok with approved status and the applicant now a member
#[tokio::test]
async fn approval_adds_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let community = factory::create_community(db).await?;
    let user = factory::create_user(db).await?;
    let applicant = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();
    let service = CommunityService::new(db);

    let application = service.apply(&community.slug, &applicant, None).await?;
    let processed = service
        .process_application(&community.slug, application.uid, ApplicationStatus::Approved)
        .await?;

    assert_eq!(processed.status, ApplicationStatus::Approved);
    let member = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();
    assert_eq!(member.community_uid(), Some(community.uid));

    Ok(())
}

/// Tests processing an application back to submitted.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_submitted_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let community = factory::create_community(db).await?;

    let result = CommunityService::new(db)
        .process_application(&community.slug, uuid::Uuid::new_v4(), ApplicationStatus::Submitted)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
