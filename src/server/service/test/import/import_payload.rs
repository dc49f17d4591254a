use super::*;

/// Tests importing a full payload into an empty database.
///
/// Expected: Ok, legacy uids kept, placeholder users and the registration created
#[tokio::test]
async fn imports_with_legacy_uids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();

    let mission = ImportService::new(db, &http, "http://legacy.invalid")
        .import_payload(payload("Legacy-Op"), None)
        .await?;

    assert_eq!(mission.slug, "legacy-op");
    assert_eq!(mission.creator.uid, uid(CREATOR_UID));
    assert_eq!(mission.community.map(|c| c.uid), Some(uid(COMMUNITY_UID)));

    let creator = UserRepository::new(db).find_by_uid(uid(CREATOR_UID)).await?.unwrap();
    assert_eq!(creator.steam_id, format!("imported_{}", CREATOR_UID));
    assert!(creator.is_imported());
    assert_eq!(creator.community_uid(), Some(uid(COMMUNITY_UID)));

    let slotlist = SlotService::new(db).get_slotlist(mission.uid).await?;
    assert_eq!(slotlist.len(), 1);
    assert_eq!(slotlist[0].uid, uid(GROUP_UID));
    assert_eq!(slotlist[0].slots.len(), 2);
    assert!(slotlist[0].slots[1].auto_assignable);

    let slot = SlotRepository::new(db).find_by_uid(uid(SLOT_UID)).await?.unwrap();
    assert_eq!(slot.assignee_uid, Some(uid(ASSIGNEE_UID)));
    let registration = RegistrationRepository::new(db)
        .find_by_uid(uid(REGISTRATION_UID))
        .await?
        .unwrap();
    assert_eq!(registration.user_uid, uid(ASSIGNEE_UID));

    Ok(())
}

/// Tests importing onto an existing community and an explicit creator.
///
/// Expected: Ok, community reused and the given creator owning the mission
#[tokio::test]
async fn reuses_community_and_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let existing = factory::community::CommunityFactory::new(db)
        .slug("legacy-community")
        .build()
        .await?;
    let owner = factory::create_user(db).await?;

    let mission = ImportService::new(db, &http, "http://legacy.invalid")
        .import_payload(payload("reuse-op"), Some(owner.uid))
        .await?;

    assert_eq!(mission.creator.uid, owner.uid);
    assert_eq!(mission.community.map(|c| c.uid), Some(existing.uid));
    assert!(CommunityRepository::new(db)
        .find_by_uid(uid(COMMUNITY_UID))
        .await?
        .is_none());

    Ok(())
}

/// Tests importing a slug that already exists locally.
///
/// Expected: Err(ImportError::MissionAlreadyExists)
#[tokio::test]
async fn rejects_existing_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let user = factory::create_user(db).await?;
    factory::mission::MissionFactory::new(db, user.uid)
        .slug("taken-op")
        .build()
        .await?;

    let result = ImportService::new(db, &http, "http://legacy.invalid")
        .import_payload(payload("taken-op"), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::MissionAlreadyExists(_)))
    ));

    Ok(())
}

/// Tests importing a legacy slug that would escape the permission namespace.
///
/// Expected: Err(ImportError::InvalidSlug)
#[tokio::test]
async fn rejects_invalid_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();

    let result = ImportService::new(db, &http, "http://legacy.invalid")
        .import_payload(payload("op.*"), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::InvalidSlug(_)))
    ));

    Ok(())
}

/// Tests importing with a creator that does not exist.
///
/// Expected: Err(ImportError::CreatorNotFound)
#[tokio::test]
async fn rejects_unknown_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();

    let result = ImportService::new(db, &http, "http://legacy.invalid")
        .import_payload(payload("orphan-op"), Some(Uuid::new_v4()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::CreatorNotFound(_)))
    ));

    Ok(())
}
