use super::*;

/// Tests confirming a registration.
///
/// Expected: Ok, slot assigned, registration removed and the registrant notified
#[tokio::test]
async fn confirming_assigns_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (mission, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    let registration = factory::create_registration(db, player.uid, slot.uid, None).await?;

    let (_, confirmed) = RegistrationService::new(db)
        .update(&mission, slot.uid, registration.uid, true, false)
        .await?;

    assert!(confirmed);
    let slot = SlotRepository::new(db).find_by_uid(slot.uid).await?.unwrap();
    assert_eq!(slot.assignee_uid, Some(player.uid));
    assert!(RegistrationRepository::new(db)
        .find_by_uid(registration.uid)
        .await?
        .is_none());
    let notifications = NotificationRepository::new(db)
        .get_paginated(player.uid, false, PageParams::new(10, 0))
        .await?;
    assert_eq!(notifications.total, 1);

    Ok(())
}

/// Tests confirming with notifications suppressed.
///
/// Expected: Ok with no notification created
#[tokio::test]
async fn suppresses_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (mission, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    let registration = factory::create_registration(db, player.uid, slot.uid, None).await?;

    RegistrationService::new(db)
        .update(&mission, slot.uid, registration.uid, true, true)
        .await?;

    let notifications = NotificationRepository::new(db)
        .get_paginated(player.uid, false, PageParams::new(10, 0))
        .await?;
    assert_eq!(notifications.total, 0);

    Ok(())
}

/// Tests confirming a registration for a slot that is already assigned.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_assigned_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let slot = factory::slot::SlotFactory::new(db, group.uid)
        .assignee(Some(creator.uid))
        .build()
        .await?;
    let registration = factory::create_registration(db, player.uid, slot.uid, None).await?;

    let result = RegistrationService::new(db)
        .update(&mission, slot.uid, registration.uid, true, false)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
