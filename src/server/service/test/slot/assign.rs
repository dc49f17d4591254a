use super::*;

/// Tests assigning a user to an open slot.
///
/// Expected: Ok with assignee set, pending registration removed and a notification sent
#[tokio::test]
async fn assigns_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (mission, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    factory::create_registration(db, player.uid, slot.uid, None).await?;

    let assigned = SlotService::new(db)
        .assign(&mission, slot.uid, player.uid, false)
        .await?;

    assert_eq!(assigned.assignee.map(|a| a.uid), Some(player.uid));
    assert_eq!(assigned.registration_count, 0);

    let notifications = NotificationRepository::new(db)
        .get_paginated(player.uid, false, PageParams::new(10, 0))
        .await?;
    assert_eq!(notifications.total, 1);
    assert_eq!(notifications.items[0].notification_type, SLOT_ASSIGNED);

    Ok(())
}

/// Tests assigning a slot already held by someone else.
///
/// Expected: Err(AppError::Conflict) without force, Ok with force
#[tokio::test]
async fn requires_force_to_replace_assignee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let holder = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let slot = factory::slot::SlotFactory::new(db, group.uid)
        .assignee(Some(holder.uid))
        .build()
        .await?;
    let service = SlotService::new(db);

    let result = service.assign(&mission, slot.uid, other.uid, false).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let assigned = service.assign(&mission, slot.uid, other.uid, true).await?;
    assert_eq!(assigned.assignee.map(|a| a.uid), Some(other.uid));

    Ok(())
}

/// Tests unassigning a slot that has no assignee.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn unassign_requires_assignee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let (mission, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;

    let result = SlotService::new(db)
        .unassign(&mission, slot.uid, creator.uid)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
