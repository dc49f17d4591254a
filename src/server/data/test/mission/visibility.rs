use super::*;

/// Tests that anonymous viewers only see public missions.
///
/// Expected: Ok with the public mission only
#[tokio::test]
async fn anonymous_sees_public_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let public = factory::create_mission(db, creator.uid).await?;
    for visibility in ["hidden", "private", "community"] {
        factory::mission::MissionFactory::new(db, creator.uid)
            .visibility(visibility)
            .build()
            .await?;
    }

    let condition = visibility_condition(&MissionViewer::anonymous(), vec![]);
    let page = MissionRepository::new(db)
        .get_paginated(&MissionListParams::new(25, 0), condition)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].uid, public.uid);

    Ok(())
}

/// Tests community visibility and access grants.
///
/// Expected: Ok with the community mission and the private mission granted
/// to the viewer, but not the hidden one
#[tokio::test]
async fn member_sees_community_and_granted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let creator = factory::create_user(db).await?;
    let viewer = factory::user::UserFactory::new(db)
        .community(Some(community.uid))
        .build()
        .await?;

    let community_mission = factory::mission::MissionFactory::new(db, creator.uid)
        .visibility("community")
        .community(Some(community.uid))
        .build()
        .await?;
    let private = factory::mission::MissionFactory::new(db, creator.uid)
        .visibility("private")
        .build()
        .await?;
    let hidden = factory::mission::MissionFactory::new(db, creator.uid)
        .visibility("hidden")
        .build()
        .await?;

    let condition = visibility_condition(
        &MissionViewer {
            user_uid: Some(viewer.uid),
            community_uid: Some(community.uid),
            is_admin: false,
            editable_slugs: vec![],
        },
        vec![private.uid, hidden.uid],
    );
    let page = MissionRepository::new(db)
        .get_paginated(&MissionListParams::new(25, 0), condition)
        .await?;

    let mut uids: Vec<_> = page.items.iter().map(|m| m.uid).collect();
    uids.sort();
    let mut expected = vec![community_mission.uid, private.uid];
    expected.sort();
    assert_eq!(uids, expected);

    Ok(())
}

/// Tests that creators and editors see their hidden missions.
///
/// Expected: Ok with both hidden missions visible
#[tokio::test]
async fn editors_see_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::mission::MissionFactory::new(db, viewer.uid)
        .visibility("hidden")
        .build()
        .await?;
    let edited = factory::mission::MissionFactory::new(db, other.uid)
        .visibility("hidden")
        .build()
        .await?;

    let condition = visibility_condition(
        &MissionViewer {
            user_uid: Some(viewer.uid),
            community_uid: None,
            is_admin: false,
            editable_slugs: vec![edited.slug.clone()],
        },
        vec![],
    );
    let page = MissionRepository::new(db)
        .get_paginated(&MissionListParams::new(25, 0), condition)
        .await?;

    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests that admins get no visibility filter.
///
/// Expected: None
#[test]
fn admin_has_no_condition() {
    let viewer = MissionViewer {
        is_admin: true,
        ..MissionViewer::anonymous()
    };

    assert!(visibility_condition(&viewer, vec![]).is_none());
}
