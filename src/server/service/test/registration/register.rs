use super::*;

/// Tests registering for an open slot and registering twice.
///
/// Expected: Ok for the first registration, Err(AppError::BadRequest) for the duplicate
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (mission, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    let player = load_user(db, player.uid).await;
    let service = RegistrationService::new(db);

    let registration = service
        .register(mission.uid, slot.uid, &player, Some("Medic please".to_string()))
        .await?;
    assert_eq!(registration.user.uid, player.uid);
    assert_eq!(registration.comment.as_deref(), Some("Medic please"));

    let result = service.register(mission.uid, slot.uid, &player, None).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering for a blocked slot.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blocked_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let slot = factory::slot::SlotFactory::new(db, group.uid)
        .blocked(true)
        .build()
        .await?;
    let player = load_user(db, creator.uid).await;

    let result = RegistrationService::new(db)
        .register(mission.uid, slot.uid, &player, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering for a slot restricted to a community the user is not in.
///
/// Expected: Err(AppError::Forbidden) for outsiders, Ok for members
#[tokio::test]
async fn enforces_community_restriction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let community = factory::create_community(db).await?;
    let creator = factory::create_user(db).await?;
    let member = factory::user::UserFactory::new(db)
        .community(Some(community.uid))
        .build()
        .await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let slot = factory::slot::SlotFactory::new(db, group.uid)
        .restricted_community(Some(community.uid))
        .build()
        .await?;
    let service = RegistrationService::new(db);

    let outsider = load_user(db, creator.uid).await;
    let result = service.register(mission.uid, slot.uid, &outsider, None).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let member = load_user(db, member.uid).await;
    service.register(mission.uid, slot.uid, &member, None).await?;

    Ok(())
}
