use super::*;

/// Tests that deleting a mission removes its scoped permissions.
///
/// Expected: Ok, mission gone and only unrelated permissions left
#[tokio::test]
async fn removes_mission_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = MissionService::new(db);

    service
        .create(user.uid, create_dto("Doomed", Some("doomed")))
        .await?;
    factory::create_permission(db, user.uid, "mission.doomed.editor").await?;
    factory::create_permission(db, user.uid, "mission.doomed-two.editor").await?;

    let model = service.find_model("doomed").await?;
    service.delete(&model).await?;

    assert!(matches!(
        service.find_model("doomed").await,
        Err(AppError::NotFound(_))
    ));
    let permissions = PermissionRepository::new(db).get_strings(user.uid).await?;
    assert_eq!(permissions, vec!["mission.doomed-two.editor".to_string()]);

    Ok(())
}
