use super::*;

/// Tests moving a group towards the end of the list.
///
/// Expected: Ok with the groups in between pulled up by one
#[tokio::test]
async fn moves_group_down() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 4).await?;

    let updated = SlotService::new(db)
        .update_slot_group(
            mission.uid,
            groups[0],
            UpdateSlotGroupParams {
                order_number: Some(3),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.order_number, 3);
    assert_eq!(
        group_orders(db, mission.uid).await?,
        vec![(groups[1], 1), (groups[2], 2), (groups[0], 3), (groups[3], 4)]
    );

    Ok(())
}

/// Tests moving a group towards the start of the list.
///
/// Expected: Ok with the groups in between pushed down by one
#[tokio::test]
async fn moves_group_up() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 4).await?;

    SlotService::new(db)
        .update_slot_group(
            mission.uid,
            groups[3],
            UpdateSlotGroupParams {
                order_number: Some(2),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(
        group_orders(db, mission.uid).await?,
        vec![(groups[0], 1), (groups[3], 2), (groups[1], 3), (groups[2], 4)]
    );

    Ok(())
}

/// Tests that out-of-range order numbers are clamped to the list bounds.
///
/// Expected: Ok with the group at the end for a large target and first for zero
#[tokio::test]
async fn clamps_order_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 3).await?;
    let service = SlotService::new(db);

    let updated = service
        .update_slot_group(
            mission.uid,
            groups[0],
            UpdateSlotGroupParams {
                order_number: Some(99),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.order_number, 3);
    assert_eq!(
        group_orders(db, mission.uid).await?,
        vec![(groups[1], 1), (groups[2], 2), (groups[0], 3)]
    );

    let updated = service
        .update_slot_group(
            mission.uid,
            groups[0],
            UpdateSlotGroupParams {
                order_number: Some(0),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.order_number, 1);
    assert_eq!(
        group_orders(db, mission.uid).await?,
        vec![(groups[0], 1), (groups[1], 2), (groups[2], 3)]
    );

    Ok(())
}

/// Tests updating a group of another mission.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_group_of_other_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let other = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, other.uid, 1).await?;

    let result = SlotService::new(db)
        .update_slot_group(mission.uid, groups[0], UpdateSlotGroupParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
