use super::*;

/// Tests listing permissions under a mission prefix with their holders.
///
/// Expected: Ok with only permissions of that mission
#[tokio::test]
async fn lists_by_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let editor = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_permission(db, editor.uid, "mission.op-one.editor").await?;
    factory::create_permission(db, other.uid, "mission.op-two.editor").await?;

    let granted = PermissionRepository::new(db)
        .get_with_users_by_prefix("mission.op-one.")
        .await?;

    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].user.uid, editor.uid);

    Ok(())
}

/// Tests deleting every permission under a prefix.
///
/// Expected: Ok with the matching permissions removed and others kept
#[tokio::test]
async fn deletes_by_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "community.alpha.leader").await?;
    factory::create_permission(db, user.uid, "community.alpha.recruitment").await?;
    factory::create_permission(db, user.uid, "admin.user").await?;

    let repo = PermissionRepository::new(db);
    let removed = repo.delete_by_prefix("community.alpha.").await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.get_strings(user.uid).await?, vec!["admin.user".to_string()]);

    Ok(())
}

/// Tests that `_` in a prefix only matches a literal underscore.
///
/// Expected: Ok with `community.axb.*` untouched by listing and deleting `community.a_b.`
#[tokio::test]
async fn underscore_in_prefix_is_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;
    factory::create_permission(db, leader.uid, "community.a_b.leader").await?;
    factory::create_permission(db, bystander.uid, "community.axb.leader").await?;

    let repo = PermissionRepository::new(db);
    let granted = repo.get_with_users_by_prefix("community.a_b.").await?;
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].user.uid, leader.uid);

    let removed = repo.delete_by_prefix("community.a_b.").await?;
    assert_eq!(removed, 1);
    assert_eq!(
        repo.get_strings(bystander.uid).await?,
        vec!["community.axb.leader".to_string()]
    );

    Ok(())
}
