use super::*;

/// Tests deleting another user's registration without manage rights.
///
/// Expected: Err(AppError::Forbidden), then Ok when allowed to manage
#[tokio::test]
async fn requires_manage_for_foreign_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (mission, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    let registration = factory::create_registration(db, player.uid, slot.uid, None).await?;
    let service = RegistrationService::new(db);

    let result = service
        .delete(mission.uid, slot.uid, registration.uid, creator.uid, false)
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    service
        .delete(mission.uid, slot.uid, registration.uid, creator.uid, true)
        .await?;
    assert!(RegistrationRepository::new(db)
        .find_by_uid(registration.uid)
        .await?
        .is_none());

    Ok(())
}
