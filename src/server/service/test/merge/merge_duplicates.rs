use super::*;

/// Tests reporting without applying.
///
/// Expected: Ok with a mergeable group and both users still present
#[tokio::test]
async fn reports_without_applying() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let imported = factory::user::UserFactory::new(db)
        .nickname("Ghost")
        .steam_id("imported_ghost")
        .build()
        .await?;
    let real = factory::user::UserFactory::new(db)
        .nickname("Ghost")
        .build()
        .await?;

    let report = MergeService::new(db).merge_duplicates(false).await?;

    assert_eq!(report.groups.len(), 1);
    assert_eq!(
        report.groups[0].outcome,
        MergeOutcome::Mergeable {
            target: real.uid,
            sources: vec![imported.uid],
        }
    );
    assert_eq!(report.merged_users(), 1);
    assert!(UserRepository::new(db).exists(imported.uid).await?);

    Ok(())
}

/// Tests merging an imported user holding a slot and registrations.
///
/// Expected: Ok, slot and registration moved, duplicate registration dropped,
/// community transferred and the imported user deleted
#[tokio::test]
async fn moves_assignments_and_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let community = factory::create_community(db).await?;
    let imported = factory::user::UserFactory::new(db)
        .nickname("Ghost")
        .steam_id("imported_ghost")
        .community(Some(community.uid))
        .build()
        .await?;
    let real = factory::user::UserFactory::new(db)
        .nickname("Ghost")
        .build()
        .await?;
    let creator = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let group = factory::create_slot_group(db, mission.uid).await?;
    let held = factory::slot::SlotFactory::new(db, group.uid)
        .assignee(Some(imported.uid))
        .build()
        .await?;
    let moved = factory::create_slot(db, group.uid).await?;
    let shared = factory::create_slot(db, group.uid).await?;
    factory::create_registration(db, imported.uid, moved.uid, None).await?;
    factory::create_registration(db, imported.uid, shared.uid, None).await?;
    factory::create_registration(db, real.uid, shared.uid, None).await?;

    let report = MergeService::new(db).merge_duplicates(true).await?;

    assert_eq!(
        report.groups[0].outcome,
        MergeOutcome::Merged {
            target: real.uid,
            sources: vec![imported.uid],
        }
    );

    let user_repo = UserRepository::new(db);
    assert!(!user_repo.exists(imported.uid).await?);
    let real = user_repo.find_by_uid(real.uid).await?.unwrap();
    assert_eq!(real.community_uid(), Some(community.uid));

    let held = SlotRepository::new(db).find_by_uid(held.uid).await?.unwrap();
    assert_eq!(held.assignee_uid, Some(real.uid));

    let registrations = RegistrationRepository::new(db).get_by_user(real.uid).await?;
    assert_eq!(registrations.len(), 2);

    Ok(())
}

/// Tests groups that cannot be merged automatically.
///
/// Expected: Ok with both groups skipped and nothing deleted
#[tokio::test]
async fn skips_ambiguous_groups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..2 {
        factory::user::UserFactory::new(db).nickname("Twin").build().await?;
        factory::user::UserFactory::new(db)
            .nickname("Echo")
            .steam_id(format!("imported_{}", uuid::Uuid::new_v4()))
            .build()
            .await?;
    }

    let report = MergeService::new(db).merge_duplicates(true).await?;

    assert_eq!(report.skipped_groups(), 2);
    assert_eq!(report.merged_users(), 0);
    let outcomes: Vec<_> = report
        .groups
        .iter()
        .map(|g| (g.nickname.as_str(), g.outcome.clone()))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("Echo", MergeOutcome::AllImported),
            ("Twin", MergeOutcome::MultipleReal)
        ]
    );

    Ok(())
}
