use super::*;

/// Tests that hydration attaches assignee, restricted community and registration count.
///
/// Expected: Ok with all three filled for the assigned slot
#[tokio::test]
async fn attaches_related_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let applicant = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let slot = factory::slot::SlotFactory::new(db, group.uid)
        .assignee(Some(player.uid))
        .restricted_community(Some(community.uid))
        .build()
        .await?;
    let open = factory::slot::SlotFactory::new(db, group.uid)
        .order_number(2)
        .build()
        .await?;
    factory::create_registration(db, applicant.uid, slot.uid, None).await?;
    factory::create_registration(db, player.uid, slot.uid, Some("ready")).await?;

    let slots = SlotRepository::new(db).hydrate(vec![slot, open]).await?;

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].assignee.as_ref().map(|u| u.uid), Some(player.uid));
    assert_eq!(
        slots[0].restricted_community.as_ref().map(|c| c.uid),
        Some(community.uid)
    );
    assert_eq!(slots[0].registration_count, 2);
    assert!(slots[1].assignee.is_none());
    assert_eq!(slots[1].registration_count, 0);

    Ok(())
}
