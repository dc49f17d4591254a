use super::*;

/// Tests inserting a slot from create parameters.
///
/// Expected: Ok with required DLCs stored and no assignee
#[tokio::test]
async fn creates_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;

    let params = CreateSlotParams {
        slot_group_uid: group.uid,
        title: "Squad Leader".to_string(),
        description: None,
        detailed_description: None,
        required_dlcs: vec!["apex".to_string()],
        restricted_community_uid: None,
        blocked: false,
        reserve: false,
        auto_assignable: true,
        insert_after: 0,
    };
    let repo = SlotRepository::new(db);
    let slot = repo.create(NewSlot::from_params(params, 1)).await?;

    assert_eq!(slot.order_number, 1);
    assert!(slot.assignee_uid.is_none());
    let hydrated = repo.hydrate(vec![slot]).await?;
    assert_eq!(hydrated[0].required_dlcs, vec!["apex".to_string()]);

    Ok(())
}

/// Tests assigning and clearing a slot's assignee.
///
/// Expected: Ok with the assignee set, then cleared
#[tokio::test]
async fn sets_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (_, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;

    let repo = SlotRepository::new(db);
    let assigned = repo.set_assignee(slot.uid, Some(player.uid)).await?;
    assert_eq!(assigned.assignee_uid, Some(player.uid));

    let cleared = repo.set_assignee(slot.uid, None).await?;
    assert!(cleared.assignee_uid.is_none());

    Ok(())
}
