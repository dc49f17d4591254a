use super::*;

/// Tests marking a notification read.
///
/// Expected: Ok(Some) with read set
#[tokio::test]
async fn marks_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.uid).await?;

    let marked = NotificationRepository::new(db)
        .mark_read(notification.uid, user.uid)
        .await?;

    assert!(marked.is_some_and(|n| n.read));

    Ok(())
}

/// Tests that another user's notification cannot be marked or deleted.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn ignores_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.uid).await?;

    let repo = NotificationRepository::new(db);
    assert!(repo.mark_read(notification.uid, other.uid).await?.is_none());
    assert!(!repo.delete(notification.uid, other.uid).await?);
    assert!(repo.delete(notification.uid, owner.uid).await?);

    Ok(())
}

/// Tests marking everything read.
///
/// Expected: Ok(2) and no unread notifications left
#[tokio::test]
async fn marks_all_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.uid).await?;
    factory::create_notification(db, user.uid).await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.mark_all_read(user.uid).await?, 2);
    assert_eq!(repo.count_unread(user.uid).await?, 0);

    Ok(())
}
