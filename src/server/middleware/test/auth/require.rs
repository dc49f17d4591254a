use super::*;

/// Tests that a superadmin passes every requirement.
///
/// Expected: Ok for community and mission requirements alike
#[tokio::test]
async fn superadmin_passes_everything() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "admin.superadmin").await?;
    let token = token_for(&user);

    let result = AuthGuard::new(db, &token)
        .require(&[
            Permission::CommunityLeader("alpha".to_string()),
            Permission::MissionEditor {
                slug: "op-dawn".to_string(),
                creator_uid: uuid::Uuid::new_v4(),
            },
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the community leader requirement.
///
/// Expected: Ok for the leader of alpha, Err(AccessDenied) for bravo
#[tokio::test]
async fn checks_community_leader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "community.alpha.leader").await?;
    let token = token_for(&user);
    let guard = AuthGuard::new(db, &token);

    assert!(guard
        .require(&[Permission::CommunityLeader("alpha".to_string())])
        .await
        .is_ok());
    assert!(matches!(
        guard
            .require(&[Permission::CommunityLeader("bravo".to_string())])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that recruiters pass the recruitment requirement but not the leader one.
///
/// Expected: Ok for recruitment, Err for leader
#[tokio::test]
async fn recruiter_is_not_leader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "community.alpha.recruitment").await?;
    let token = token_for(&user);
    let guard = AuthGuard::new(db, &token);

    assert!(guard
        .require(&[Permission::CommunityRecruitment("alpha".to_string())])
        .await
        .is_ok());
    assert!(guard
        .require(&[Permission::CommunityLeader("alpha".to_string())])
        .await
        .is_err());

    Ok(())
}

/// Tests that the mission creator counts as editor without any permission row.
///
/// Expected: Ok for the creator, Err for another user
#[tokio::test]
async fn creator_is_mission_editor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let requirement = Permission::MissionEditor {
        slug: "op-dawn".to_string(),
        creator_uid: creator.uid,
    };

    let creator_token = token_for(&creator);
    let other_token = token_for(&other);

    assert!(AuthGuard::new(db, &creator_token)
        .require(&[requirement.clone()])
        .await
        .is_ok());
    assert!(AuthGuard::new(db, &other_token)
        .require(&[requirement])
        .await
        .is_err());

    Ok(())
}

/// Tests slot assignment rights from the global assign permission.
///
/// Expected: Ok for `mission.slot.assign`
#[tokio::test]
async fn slot_assigner_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_permission(db, user.uid, "mission.slot.assign").await?;
    let token = token_for(&user);

    let result = AuthGuard::new(db, &token)
        .require(&[Permission::SlotAssigner {
            slug: "op-dawn".to_string(),
            creator_uid: uuid::Uuid::new_v4(),
        }])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the self-or-permission requirement.
///
/// Expected: Ok on own uid, Err on someone else's without `admin.user`
#[tokio::test]
async fn self_or_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let token = token_for(&user);
    let guard = AuthGuard::new(db, &token);

    assert!(guard
        .require(&[Permission::SelfOr(user.uid, "admin.user".to_string())])
        .await
        .is_ok());
    assert!(guard
        .require(&[Permission::SelfOr(other.uid, "admin.user".to_string())])
        .await
        .is_err());

    Ok(())
}
