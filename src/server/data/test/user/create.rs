use super::*;

/// Tests creating a user and looking them up by Steam ID.
///
/// Expected: Ok with the user active and findable by Steam ID
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            uid: None,
            nickname: "Rifleman".to_string(),
            steam_id: "76561198000000042".to_string(),
            community_uid: None,
        })
        .await?;

    assert!(user.active);
    assert!(user.community.is_none());
    let found = repo.find_by_steam_id("76561198000000042").await?;
    assert_eq!(found.map(|u| u.uid), Some(user.uid));

    Ok(())
}

/// Tests that a created user carries their community.
///
/// Expected: Ok with the community attached
#[tokio::test]
async fn attaches_community() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            uid: None,
            nickname: "Medic".to_string(),
            steam_id: "76561198000000043".to_string(),
            community_uid: Some(community.uid),
        })
        .await?;

    assert_eq!(user.community_uid(), Some(community.uid));

    Ok(())
}

/// Tests deactivating a user through a partial update.
///
/// Expected: Ok with active false and nickname unchanged
#[tokio::test]
async fn update_deactivates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let updated = UserRepository::new(db)
        .update(
            user.uid,
            UpdateUserParams {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.nickname, user.nickname);

    Ok(())
}
