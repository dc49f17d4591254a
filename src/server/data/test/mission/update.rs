use super::*;

/// Tests that tech support flags merge into the existing column.
///
/// Expected: Ok with respawn added and teleport kept
#[tokio::test]
async fn merges_tech_support_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let mission = factory::mission::MissionFactory::new(db, creator.uid)
        .tech_support(Some("teleport".to_string()))
        .build()
        .await?;

    let updated = MissionRepository::new(db)
        .update(
            mission.uid,
            UpdateMissionParams {
                tech_respawn: Some(true),
                visibility: Some(MissionVisibility::Private),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.tech_support.as_deref(), Some("teleport, respawn"));
    assert_eq!(updated.visibility, MissionVisibility::Private);
    assert_eq!(updated.title, mission.title);

    Ok(())
}

/// Tests looking a mission up by slug regardless of case.
///
/// Expected: Ok with the mission found
#[tokio::test]
async fn finds_by_slug_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    factory::mission::MissionFactory::new(db, creator.uid)
        .slug("operation-dawn")
        .build()
        .await?;

    let repo = MissionRepository::new(db);
    assert!(repo.find_by_slug("Operation-Dawn").await?.is_some());
    assert!(repo.slug_exists("operation-dawn").await?);
    assert!(!repo.slug_exists("operation-dusk").await?);

    Ok(())
}
