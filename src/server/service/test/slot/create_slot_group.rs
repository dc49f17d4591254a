use super::*;

/// Tests inserting a slot group between existing groups.
///
/// Expected: Ok with the new group at 2 and the former second group shifted to 3
#[tokio::test]
async fn inserts_after_and_shifts_following() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;
    let first = factory::slot_group::SlotGroupFactory::new(db, mission.uid)
        .order_number(1)
        .build()
        .await?;
    let second = factory::slot_group::SlotGroupFactory::new(db, mission.uid)
        .order_number(2)
        .build()
        .await?;

    let created = SlotService::new(db)
        .create_slot_group(CreateSlotGroupParams {
            mission_uid: mission.uid,
            title: "Bravo".to_string(),
            description: String::new(),
            insert_after: 1,
        })
        .await?;

    assert_eq!(created.order_number, 2);
    assert!(created.description.is_none());

    let groups = SlotGroupRepository::new(db).get_by_mission(mission.uid).await?;
    let orders: Vec<_> = groups.iter().map(|g| (g.uid, g.order_number)).collect();
    assert_eq!(
        orders,
        vec![(first.uid, 1), (created.uid, 2), (second.uid, 3)]
    );

    Ok(())
}

/// Tests that a negative insert position is treated as the start.
///
/// Expected: Ok with order number 1
#[tokio::test]
async fn clamps_negative_insert_after() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mission = factory::create_mission(db, user.uid).await?;

    let created = SlotService::new(db)
        .create_slot_group(CreateSlotGroupParams {
            mission_uid: mission.uid,
            title: "Alpha".to_string(),
            description: "Lead".to_string(),
            insert_after: -5,
        })
        .await?;

    assert_eq!(created.order_number, 1);
    assert_eq!(created.description.as_deref(), Some("Lead"));

    Ok(())
}
