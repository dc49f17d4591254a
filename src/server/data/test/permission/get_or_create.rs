use super::*;

/// Tests that permissions are stored lower-case.
///
/// Expected: Ok with the lower-cased permission string
#[tokio::test]
async fn stores_lowercase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let permission = PermissionRepository::new(db)
        .get_or_create(user.uid, "Mission.Op-One.Editor")
        .await?;

    assert_eq!(permission.permission, "mission.op-one.editor");

    Ok(())
}

/// Tests that granting the same permission twice returns the existing row.
///
/// Expected: Ok with the same uid and a single stored permission
#[tokio::test]
async fn returns_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PermissionRepository::new(db);
    let first = repo.get_or_create(user.uid, "admin.mission").await?;
    let second = repo.get_or_create(user.uid, "ADMIN.MISSION").await?;

    assert_eq!(first.uid, second.uid);
    assert_eq!(repo.get_strings(user.uid).await?, vec!["admin.mission".to_string()]);

    Ok(())
}
