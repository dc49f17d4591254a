use super::*;

/// Tests filtering a community's applications by status.
///
/// Expected: Ok with only submitted applications when filtering
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let pending = factory::create_user(db).await?;
    let denied = factory::create_user(db).await?;
    factory::community_application::create_application(db, pending.uid, community.uid, "submitted")
        .await?;
    factory::community_application::create_application(db, denied.uid, community.uid, "denied")
        .await?;

    let repo = CommunityApplicationRepository::new(db);
    let submitted = repo
        .get_by_community_paginated(
            community.uid,
            Some(ApplicationStatus::Submitted),
            PageParams::new(25, 0),
        )
        .await?;
    let all = repo
        .get_by_community_paginated(community.uid, None, PageParams::new(25, 0))
        .await?;

    assert_eq!(submitted.total, 1);
    assert_eq!(submitted.items[0].user.uid, pending.uid);
    assert_eq!(all.total, 2);

    Ok(())
}

/// Tests submitting and then approving an application.
///
/// Expected: Ok with status submitted, then approved
#[tokio::test]
async fn creates_and_updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let user = factory::create_user(db).await?;

    let repo = CommunityApplicationRepository::new(db);
    let application = repo
        .create(user.uid, community.uid, "Let me in".to_string())
        .await?;
    assert_eq!(application.status, "submitted");

    let found = repo
        .find_by_user_and_community(user.uid, community.uid)
        .await?
        .unwrap();
    let updated = repo
        .update_status(found, ApplicationStatus::Approved)
        .await?;

    assert_eq!(updated.status, "approved");

    Ok(())
}
