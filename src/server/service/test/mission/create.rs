use super::*;

/// Tests that the slug is derived from the title and the creator permission granted.
///
/// Expected: Ok with slugified title and a `mission.<slug>.creator` permission
#[tokio::test]
async fn derives_slug_and_grants_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mission = MissionService::new(db)
        .create(user.uid, create_dto("Operation Red Dawn", None))
        .await?;

    assert_eq!(mission.slug, "operation-red-dawn");
    assert_eq!(mission.creator.uid, user.uid);

    let permissions = PermissionRepository::new(db).get_strings(user.uid).await?;
    assert!(permissions.contains(&"mission.operation-red-dawn.creator".to_string()));

    Ok(())
}

/// Tests creating a mission with a slug that is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = MissionService::new(db);

    service
        .create(user.uid, create_dto("First", Some("op-alpha")))
        .await?;
    let result = service
        .create(user.uid, create_dto("Second", Some("OP-Alpha")))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a mission with an unknown DLC.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_dlc() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mut dto = create_dto("Op", None);
    dto.required_dlcs = Some(vec!["not-a-dlc".to_string()]);
    let result = MissionService::new(db).create(user.uid, dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that explicit slugs outside the slug alphabet are refused.
///
/// Expected: Err(AppError::BadRequest) and no creator permission granted
#[tokio::test]
async fn rejects_slugs_with_permission_metacharacters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = MissionService::new(db);

    for slug in ["*", "a.b", "%"] {
        let result = service.create(user.uid, create_dto("Op", Some(slug))).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "slug {:?} should be rejected",
            slug
        );
    }

    let permissions = PermissionRepository::new(db).get_strings(user.uid).await?;
    assert!(permissions.is_empty());

    Ok(())
}
