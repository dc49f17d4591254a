use super::*;

/// Tests registering for a slot.
///
/// Expected: Ok with the registration findable by user and slot
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (_, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .create(None, player.uid, slot.uid, Some("Can lead".to_string()))
        .await?;

    let found = repo.find_by_user_and_slot(player.uid, slot.uid).await?;
    assert_eq!(found.map(|r| r.uid), Some(registration.uid));
    let hydrated = repo.find_hydrated(registration.uid).await?.unwrap();
    assert_eq!(hydrated.user.uid, player.uid);
    assert_eq!(hydrated.comment.as_deref(), Some("Can lead"));

    Ok(())
}

/// Tests removing a registration by user and slot.
///
/// Expected: Ok(1), then Ok(0) once nothing is left
#[tokio::test]
async fn deletes_by_user_and_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let (_, _, slot) = factory::helpers::create_mission_with_slot(db, creator.uid).await?;
    factory::create_registration(db, player.uid, slot.uid, None).await?;

    let repo = RegistrationRepository::new(db);
    assert_eq!(repo.delete_by_user_and_slot(player.uid, slot.uid).await?, 1);
    assert_eq!(repo.delete_by_user_and_slot(player.uid, slot.uid).await?, 0);

    Ok(())
}
