use super::*;

/// Tests that a `mission.{slug}.*` holder sees the hidden mission they may edit.
///
/// Expected: Ok from get and the mission present in the list
#[tokio::test]
async fn slug_wildcard_editor_sees_hidden_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let editor = factory::create_user(db).await?;
    factory::mission::MissionFactory::new(db, owner.uid)
        .slug("op")
        .visibility("hidden")
        .build()
        .await?;
    factory::create_permission(db, editor.uid, "mission.op.*").await?;

    let current = CurrentUser {
        user: UserRepository::new(db).find_by_uid(editor.uid).await?.unwrap(),
        permissions: PermissionRepository::new(db).get_strings(editor.uid).await?,
    };
    assert!(current.is_mission_editor("op", owner.uid));
    let viewer = current.viewer();
    let service = MissionService::new(db);

    let mission = service.get("op", &viewer).await?;
    assert_eq!(mission.slug, "op");

    let page = service.list(MissionListParams::new(25, 0), &viewer).await?;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].mission.slug, "op");

    Ok(())
}

/// Tests that unrelated permissions do not reveal a hidden mission.
///
/// Expected: Err(AppError::NotFound) and an empty list
#[tokio::test]
async fn hidden_mission_stays_hidden_for_other_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::mission::MissionFactory::new(db, owner.uid)
        .slug("op")
        .visibility("hidden")
        .build()
        .await?;
    factory::create_permission(db, other.uid, "mission.op-two.*").await?;

    let current = CurrentUser {
        user: UserRepository::new(db).find_by_uid(other.uid).await?.unwrap(),
        permissions: PermissionRepository::new(db).get_strings(other.uid).await?,
    };
    let viewer = current.viewer();
    let service = MissionService::new(db);

    assert!(matches!(
        service.get("op", &viewer).await,
        Err(AppError::NotFound(_))
    ));
    let page = service.list(MissionListParams::new(25, 0), &viewer).await?;
    assert!(page.items.is_empty());

    Ok(())
}
