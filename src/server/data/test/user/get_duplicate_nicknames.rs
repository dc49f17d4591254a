use super::*;

/// Tests grouping users that share a nickname.
///
/// Expected: Ok with one group of two users, unique nicknames omitted
#[tokio::test]
async fn groups_shared_nicknames() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("Ghost")
        .steam_id("imported_1")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .nickname("Ghost")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .nickname("Unique")
        .build()
        .await?;

    let groups = UserRepository::new(db).get_duplicate_nicknames().await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups.get("Ghost").map(Vec::len), Some(2));

    Ok(())
}
