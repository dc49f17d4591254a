use super::*;

/// Tests paging through communities ordered by name.
///
/// Expected: Ok with the requested slice and the full total
#[tokio::test]
async fn pages_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alpha", "Bravo"] {
        factory::community::CommunityFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = CommunityRepository::new(db);
    let page = repo.get_paginated(None, PageParams::new(2, 0)).await?;

    assert_eq!(page.total, 3);
    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);

    let rest = repo.get_paginated(None, PageParams::new(2, 2)).await?;
    assert_eq!(rest.items.len(), 1);
    assert_eq!(rest.items[0].name, "Charlie");

    Ok(())
}

/// Tests the search filter.
///
/// Expected: Ok with only communities whose name, tag or slug match
#[tokio::test]
async fn filters_by_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::community::CommunityFactory::new(db)
        .name("Task Force Raven")
        .build()
        .await?;
    factory::community::CommunityFactory::new(db)
        .name("Other Group")
        .build()
        .await?;

    let page = CommunityRepository::new(db)
        .get_paginated(Some("Raven"), PageParams::new(25, 0))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Task Force Raven");

    Ok(())
}
