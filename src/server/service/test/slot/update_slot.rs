use super::*;

/// Tests moving a slot within its group.
///
/// Expected: Ok with the slots in between shifted and numbering contiguous
#[tokio::test]
async fn moves_slot_and_neighbours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 1).await?;
    let slots = seed_slots(db, groups[0], 4).await?;
    let service = SlotService::new(db);

    let updated = service
        .update_slot(
            mission.uid,
            slots[3],
            UpdateSlotParams {
                order_number: Some(1),
                title: Some("Lead".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.order_number, 1);
    assert_eq!(updated.title, "Lead");
    assert_eq!(
        slot_orders(db, groups[0]).await?,
        vec![(slots[3], 1), (slots[0], 2), (slots[1], 3), (slots[2], 4)]
    );

    service
        .update_slot(
            mission.uid,
            slots[3],
            UpdateSlotParams {
                order_number: Some(50),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(
        slot_orders(db, groups[0]).await?,
        vec![(slots[0], 1), (slots[1], 2), (slots[2], 3), (slots[3], 4)]
    );

    Ok(())
}

/// Tests that a field-only update leaves the ordering alone.
///
/// Expected: Ok with unchanged order numbers
#[tokio::test]
async fn keeps_order_without_order_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 1).await?;
    let slots = seed_slots(db, groups[0], 2).await?;

    let updated = SlotService::new(db)
        .update_slot(
            mission.uid,
            slots[1],
            UpdateSlotParams {
                blocked: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.blocked);
    assert_eq!(
        slot_orders(db, groups[0]).await?,
        vec![(slots[0], 1), (slots[1], 2)]
    );

    Ok(())
}
