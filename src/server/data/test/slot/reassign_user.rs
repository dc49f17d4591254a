use super::*;

/// Tests moving every assignment of one user to another.
///
/// Expected: Ok(1) with the slot now assigned to the target
#[tokio::test]
async fn moves_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let imported = factory::create_user(db).await?;
    let real = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let slot = factory::slot::SlotFactory::new(db, group.uid)
        .assignee(Some(imported.uid))
        .build()
        .await?;

    let repo = SlotRepository::new(db);
    let moved = repo.reassign_user(imported.uid, real.uid).await?;

    assert_eq!(moved, 1);
    let slot = repo.find_by_uid(slot.uid).await?.unwrap();
    assert_eq!(slot.assignee_uid, Some(real.uid));
    assert_eq!(repo.count_assigned(imported.uid).await?, 0);

    Ok(())
}
