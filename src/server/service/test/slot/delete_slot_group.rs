use super::*;

/// Tests deleting a group from the middle of the list.
///
/// Expected: Ok with the following groups renumbered without a gap
#[tokio::test]
async fn closes_gap_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 4).await?;

    SlotService::new(db)
        .delete_slot_group(mission.uid, groups[1])
        .await?;

    assert_eq!(
        group_orders(db, mission.uid).await?,
        vec![(groups[0], 1), (groups[2], 2), (groups[3], 3)]
    );

    Ok(())
}

/// Tests deleting a slot from the middle of its group.
///
/// Expected: Ok with the following slots renumbered without a gap
#[tokio::test]
async fn closes_slot_gap_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 1).await?;
    let slots = seed_slots(db, groups[0], 3).await?;

    SlotService::new(db).delete_slot(mission.uid, slots[0]).await?;

    assert_eq!(
        slot_orders(db, groups[0]).await?,
        vec![(slots[1], 1), (slots[2], 2)]
    );

    Ok(())
}
