use super::*;

/// Tests creating a batch whose positions refer to the list as it grows.
///
/// Expected: Ok with new slots at 1 and 3 and existing slots shifted behind them
#[tokio::test]
async fn inserts_batch_in_request_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 1).await?;
    let existing = seed_slots(db, groups[0], 2).await?;

    let created = SlotService::new(db)
        .create_slots(
            mission.uid,
            vec![
                new_slot(groups[0], "Lead", 0),
                new_slot(groups[0], "Medic", 2),
            ],
        )
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].title, "Lead");
    assert_eq!(created[1].title, "Medic");
    assert_eq!(
        slot_orders(db, groups[0]).await?,
        vec![
            (created[0].uid, 1),
            (existing[0], 2),
            (created[1].uid, 3),
            (existing[1], 4),
        ]
    );

    Ok(())
}

/// Tests that a negative position inserts at the start.
///
/// Expected: Ok with the new slot first
#[tokio::test]
async fn clamps_negative_insert_after() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 1).await?;
    let existing = seed_slots(db, groups[0], 1).await?;

    let created = SlotService::new(db)
        .create_slots(mission.uid, vec![new_slot(groups[0], "Lead", -3)])
        .await?;

    assert_eq!(
        slot_orders(db, groups[0]).await?,
        vec![(created[0].uid, 1), (existing[0], 2)]
    );

    Ok(())
}

/// Tests that one invalid slot aborts the whole batch.
///
/// Expected: Err(AppError::NotFound) and no slot written
#[tokio::test]
async fn rejects_batch_with_foreign_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let other = factory::create_mission(db, user.uid).await?;
    let groups = seed_groups(db, mission.uid, 1).await?;
    let foreign = seed_groups(db, other.uid, 1).await?;

    let result = SlotService::new(db)
        .create_slots(
            mission.uid,
            vec![
                new_slot(groups[0], "Lead", 0),
                new_slot(foreign[0], "Medic", 0),
            ],
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(slot_orders(db, groups[0]).await?.is_empty());

    Ok(())
}
