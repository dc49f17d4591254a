use super::*;

/// Tests listing notifications newest first.
///
/// Expected: Ok with the recent notification before the older one
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let older = factory::notification::NotificationFactory::new(db, user.uid)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::create_notification(db, user.uid).await?;

    let page = NotificationRepository::new(db)
        .get_paginated(user.uid, false, PageParams::new(10, 0))
        .await?;

    let uids: Vec<_> = page.items.iter().map(|n| n.uid).collect();
    assert_eq!(uids, vec![newer.uid, older.uid]);

    Ok(())
}

/// Tests the unread filter and that other users' notifications are excluded.
///
/// Expected: Ok with only the user's unread notification
#[tokio::test]
async fn filters_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let unread = factory::create_notification(db, user.uid).await?;
    factory::notification::NotificationFactory::new(db, user.uid)
        .read(true)
        .build()
        .await?;
    factory::create_notification(db, other.uid).await?;

    let repo = NotificationRepository::new(db);
    let page = repo
        .get_paginated(user.uid, true, PageParams::new(10, 0))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].uid, unread.uid);
    assert_eq!(repo.count_unread(user.uid).await?, 1);

    Ok(())
}

/// Tests creating a notification.
///
/// Expected: Ok with an unread notification carrying the payload
#[tokio::test]
async fn creates_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParams {
            user_uid: user.uid,
            notification_type: "mission.slot.assigned".to_string(),
            title: None,
            message: "You were assigned".to_string(),
            additional_data: Some(serde_json::json!({"slotUid": "x"})),
        })
        .await?;

    assert!(!notification.read);
    assert_eq!(notification.additional_data, Some(serde_json::json!({"slotUid": "x"})));

    Ok(())
}
