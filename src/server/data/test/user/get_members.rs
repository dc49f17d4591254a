use super::*;

/// Tests listing members of a community.
///
/// Expected: Ok with only the community's users, ordered by nickname
#[tokio::test]
async fn lists_only_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    for nickname in ["Zulu", "Alpha"] {
        factory::user::UserFactory::new(db)
            .nickname(nickname)
            .community(Some(community.uid))
            .build()
            .await?;
    }
    factory::create_user(db).await?;

    let page = UserRepository::new(db)
        .get_members(community.uid, PageParams::new(25, 0))
        .await?;

    assert_eq!(page.total, 2);
    let names: Vec<_> = page.items.iter().map(|u| u.nickname.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zulu"]);

    Ok(())
}
