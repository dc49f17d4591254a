use super::*;

fn params(name: &str) -> CreateCommunityParams {
    CreateCommunityParams {
        name: name.to_string(),
        tag: "TAG".to_string(),
        slug: String::new(),
        website: None,
        logo_url: None,
        game_servers: Vec::new(),
        voice_comms: Vec::new(),
        repositories: Vec::new(),
    }
}

/// Tests that the creator joins the community and becomes its leader.
///
/// Expected: Ok with slug from the name, creator membership and leader permission
#[tokio::test]
async fn creator_becomes_leader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let creator = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();

    let community = CommunityService::new(db)
        .create(&creator, None, params("Task Force Ghost"))
        .await?;

    assert_eq!(community.slug, "task-force-ghost");
    let creator = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();
    assert_eq!(creator.community_uid(), Some(community.uid));
    let permissions = PermissionRepository::new(db).get_strings(user.uid).await?;
    assert_eq!(permissions, vec!["community.task-force-ghost.leader".to_string()]);

    Ok(())
}

/// Tests creating a community whose slug is taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::community::CommunityFactory::new(db)
        .slug("ghost")
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    let creator = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();

    let result = CommunityService::new(db)
        .create(&creator, Some(&existing.slug.to_uppercase()), params("Ghost"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that explicit slugs outside the slug alphabet are refused.
///
/// Expected: Err(AppError::BadRequest) and no permission granted
#[tokio::test]
async fn rejects_slugs_with_permission_metacharacters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let creator = UserRepository::new(db).find_by_uid(user.uid).await?.unwrap();
    let service = CommunityService::new(db);

    for slug in ["*", "a.b", "%"] {
        let result = service.create(&creator, Some(slug), params("Ghost")).await;
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

/// Tests that a duplicate slug that slips past the existence check becomes a conflict.
///
/// Expected: AppError::Conflict from the unique index, other database errors untouched
#[tokio::test]
async fn unique_violation_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::community::CommunityFactory::new(db)
        .slug("ghost")
        .build()
        .await?;

    let mut duplicate = params("Ghost");
    duplicate.slug = "ghost".to_string();
    let err = CommunityRepository::new(db)
        .create(None, duplicate)
        .await
        .unwrap_err();

    let mapped = AppError::on_unique_violation(err, || AppError::Conflict("taken".to_string()));
    assert!(matches!(mapped, AppError::Conflict(_)));

    let other = AppError::on_unique_violation(sea_orm::DbErr::Custom("boom".to_string()), || {
        AppError::Conflict("taken".to_string())
    });
    assert!(matches!(other, AppError::DbErr(_)));

    Ok(())
}
