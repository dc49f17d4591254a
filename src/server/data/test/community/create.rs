use super::*;

fn params(name: &str, slug: &str) -> CreateCommunityParams {
    CreateCommunityParams {
        name: name.to_string(),
        tag: "TAG".to_string(),
        slug: slug.to_string(),
        website: None,
        logo_url: None,
        game_servers: vec![],
        voice_comms: vec![],
        repositories: vec![],
    }
}

/// Tests creating a community with a generated uid.
///
/// Expected: Ok with the community findable by its slug
#[tokio::test]
async fn creates_community() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommunityRepository::new(db);
    let community = repo.create(None, params("Alpha Company", "alpha")).await?;

    assert_eq!(community.name, "Alpha Company");
    let found = repo.find_by_slug("ALPHA").await?;
    assert_eq!(found.map(|c| c.uid), Some(community.uid));

    Ok(())
}

/// Tests that an explicit uid is kept.
///
/// Expected: Ok with the community stored under the given uid
#[tokio::test]
async fn keeps_explicit_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uid = uuid::Uuid::new_v4();
    let repo = CommunityRepository::new(db);
    repo.create(Some(uid), params("Bravo", "bravo")).await?;

    assert!(repo.find_by_uid(uid).await?.is_some());

    Ok(())
}

/// Tests that slugs are unique.
///
/// Expected: Err for the second community with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommunityRepository::new(db);
    repo.create(None, params("Charlie", "charlie")).await?;
    let result = repo.create(None, params("Charlie 2", "charlie")).await;

    assert!(result.is_err());
    assert!(repo.slug_exists("charlie").await?);

    Ok(())
}
