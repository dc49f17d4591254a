use super::*;

/// Tests listing a slot's registrations with their users.
///
/// Expected: Ok with both registrations and total 2
#[tokio::test]
async fn lists_slot_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let (_, group, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    let other_slot = factory::slot::SlotFactory::new(db, group.uid)
        .order_number(2)
        .build()
        .await?;
    for _ in 0..2 {
        let player = factory::create_user(db).await?;
        factory::create_registration(db, player.uid, slot.uid, None).await?;
    }
    factory::create_registration(db, creator.uid, other_slot.uid, None).await?;

    let repo = RegistrationRepository::new(db);
    let page = repo
        .get_by_slot_paginated(slot.uid, PageParams::new(10, 0))
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|r| r.slot_uid == slot.uid));

    let mine = repo
        .slot_uids_for_user(creator.uid, vec![slot.uid, other_slot.uid])
        .await?;
    assert!(mine.contains(&other_slot.uid));
    assert!(!mine.contains(&slot.uid));

    Ok(())
}
