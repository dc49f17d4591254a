use super::*;

/// Tests that templates are listed by title with the total across pages.
///
/// Expected: Ok with the first two titles and a total of three
#[tokio::test]
async fn lists_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let user = factory::create_user(db).await?;
    let repo = SlotTemplateRepository::new(db);

    for title in ["Zulu", "Alpha", "Mike"] {
        let template =
            factory::slot_template::create_slot_template(db, user.uid, json!([])).await?;
        repo.update(
            template.uid,
            UpdateSlotTemplateParams {
                title: Some(title.to_string()),
                community_uid: Some(community.uid),
                ..Default::default()
            },
        )
        .await?;
    }

    let page = repo.get_paginated(PageParams::new(2, 0)).await?;

    assert_eq!(page.total, 3);
    let titles: Vec<&str> = page.items.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Mike"]);
    assert!(page.items.iter().all(|t| t.community.is_some()));

    Ok(())
}

/// Tests that stored slot groups are normalized when read.
///
/// Expected: Ok with a `slots` array added to the group
#[tokio::test]
async fn normalizes_groups_on_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let template =
        factory::slot_template::create_slot_template(db, user.uid, json!([{"title": "Alpha"}]))
            .await?;

    let found = SlotTemplateRepository::new(db)
        .find_by_uid(template.uid)
        .await?
        .unwrap();

    assert_eq!(found.slot_groups, vec![json!({"title": "Alpha", "slots": []})]);
    assert_eq!(found.creator_nickname, user.nickname);

    Ok(())
}
