use super::*;

/// Tests a direct user grant.
///
/// Expected: Ok(true) for the granted user, Ok(false) for anyone else
#[tokio::test]
async fn matches_user_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let granted = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;

    let repo = MissionAccessRepository::new(db);
    repo.create(mission.uid, Some(granted.uid), None).await?;

    assert!(repo.has_access(mission.uid, granted.uid, None).await?);
    assert!(!repo.has_access(mission.uid, stranger.uid, None).await?);

    Ok(())
}

/// Tests a grant to the viewer's community.
///
/// Expected: Ok(true) and the mission listed among accessible uids
#[tokio::test]
async fn matches_community_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let creator = factory::create_user(db).await?;
    let member = factory::user::UserFactory::new(db)
        .community(Some(community.uid))
        .build()
        .await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    factory::mission_access::create_mission_access(db, mission.uid, None, Some(community.uid))
        .await?;

    let repo = MissionAccessRepository::new(db);
    assert!(
        repo.has_access(mission.uid, member.uid, Some(community.uid))
            .await?
    );
    assert_eq!(
        repo.get_mission_uids_for(member.uid, Some(community.uid))
            .await?,
        vec![mission.uid]
    );

    Ok(())
}
