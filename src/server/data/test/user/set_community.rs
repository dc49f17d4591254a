use super::*;

/// Tests joining and leaving a community.
///
/// Expected: Ok with the community set, then cleared
#[tokio::test]
async fn sets_and_clears_community() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_community(user.uid, Some(community.uid)).await?;
    let joined = repo.find_by_uid(user.uid).await?.unwrap();
    assert_eq!(joined.community_uid(), Some(community.uid));

    repo.set_community(user.uid, None).await?;
    let left = repo.find_by_uid(user.uid).await?.unwrap();
    assert!(left.community.is_none());

    Ok(())
}

/// Tests setting the community of a missing user.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .set_community(uuid::Uuid::new_v4(), None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
