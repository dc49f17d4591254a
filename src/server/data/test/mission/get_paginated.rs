use super::*;

/// Tests that missions are listed newest first.
///
/// Expected: Ok with missions ordered by start time descending
#[tokio::test]
async fn orders_by_start_time_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let early = factory::mission::MissionFactory::new(db, creator.uid)
        .start_time(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let late = factory::mission::MissionFactory::new(db, creator.uid)
        .start_time(Utc::now() + Duration::days(5))
        .build()
        .await?;

    let page = MissionRepository::new(db)
        .get_paginated(&MissionListParams::new(25, 0), None)
        .await?;

    let uids: Vec<_> = page.items.iter().map(|m| m.uid).collect();
    assert_eq!(uids, vec![late.uid, early.uid]);
    assert_eq!(page.items[0].creator.uid, creator.uid);

    Ok(())
}

/// Tests excluding missions that have already ended.
///
/// Expected: Ok with only the upcoming mission
#[tokio::test]
async fn excludes_ended_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    factory::mission::MissionFactory::new(db, creator.uid)
        .start_time(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let upcoming = factory::create_mission(db, creator.uid).await?;

    let mut params = MissionListParams::new(25, 0);
    params.include_ended = false;
    let page = MissionRepository::new(db).get_paginated(&params, None).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].uid, upcoming.uid);

    Ok(())
}

/// Tests the calendar window, which ignores paging.
///
/// Expected: Ok with every mission starting inside the window
#[tokio::test]
async fn window_returns_all_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let base = Utc::now() + Duration::days(10);
    for offset in 0..3 {
        factory::mission::MissionFactory::new(db, creator.uid)
            .start_time(base + Duration::hours(offset))
            .build()
            .await?;
    }
    factory::mission::MissionFactory::new(db, creator.uid)
        .start_time(base + Duration::days(30))
        .build()
        .await?;

    let mut params = MissionListParams::new(1, 0);
    params.window = Some((base - Duration::hours(1), base + Duration::days(1)));
    let page = MissionRepository::new(db).get_paginated(&params, None).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);

    Ok(())
}
