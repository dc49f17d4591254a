use super::*;

/// Tests a partial update.
///
/// Expected: Ok with changed fields updated and others untouched
#[tokio::test]
async fn updates_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;

    let updated = CommunityRepository::new(db)
        .update(
            community.uid,
            UpdateCommunityParams {
                tag: Some("NEW".to_string()),
                website: Some("https://example.com".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.tag, "NEW");
    assert_eq!(updated.website.as_deref(), Some("https://example.com"));
    assert_eq!(updated.name, community.name);

    Ok(())
}

/// Tests updating a missing community.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommunityRepository::new(db)
        .update(uuid::Uuid::new_v4(), UpdateCommunityParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
