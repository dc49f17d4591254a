use super::*;

/// Tests that mission editor permissions become editable slugs.
///
/// Expected: Viewer with both slugs, not admin
#[tokio::test]
async fn collects_editable_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "mission.op-dawn.creator").await?;
    factory::create_permission(db, user.uid, "mission.op-dusk.editor").await?;
    factory::create_permission(db, user.uid, "mission.slot.assign").await?;
    let token = token_for(&user);

    let viewer = AuthGuard::new(db, &token).authenticate().await?.viewer();

    let mut slugs = viewer.editable_slugs.clone();
    slugs.sort();
    assert_eq!(slugs, vec!["op-dawn".to_string(), "op-dusk".to_string()]);
    assert!(!viewer.is_admin);
    assert_eq!(viewer.user_uid, Some(user.uid));

    Ok(())
}

/// Tests that `admin.mission` makes the viewer an admin.
///
/// Expected: Viewer with is_admin set
#[tokio::test]
async fn mission_admin_is_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "admin.mission").await?;
    let token = token_for(&user);

    let viewer = AuthGuard::new(db, &token).authenticate().await?.viewer();

    assert!(viewer.is_admin);

    Ok(())
}

/// Tests that a slug-scoped wildcard makes the slug editable.
///
/// Expected: Viewer with `op` editable, not admin
#[tokio::test]
async fn slug_wildcard_grants_editing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "mission.op.*").await?;
    factory::create_permission(db, user.uid, "mission.op-two.slotlist.community").await?;
    let token = token_for(&user);

    let viewer = AuthGuard::new(db, &token).authenticate().await?.viewer();

    assert_eq!(viewer.editable_slugs, vec!["op".to_string()]);
    assert!(!viewer.is_admin);

    Ok(())
}

/// Tests that an editor grant on every slug sees every mission.
///
/// Expected: Viewer with is_admin set
#[tokio::test]
async fn editor_of_every_slug_is_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "mission.*.editor").await?;
    let token = token_for(&user);

    let viewer = AuthGuard::new(db, &token).authenticate().await?.viewer();

    assert!(viewer.is_admin);
    assert!(viewer.editable_slugs.is_empty());

    Ok(())
}
