use super::*;

async fn groups(
    db: &sea_orm::DatabaseConnection,
    mission_uid: uuid::Uuid,
    count: i32,
) -> Result<Vec<entity::mission_slot_group::Model>, DbErr> {
    let mut groups = Vec::new();
    for order_number in 1..=count {
        groups.push(
            factory::slot_group::SlotGroupFactory::new(db, mission_uid)
                .order_number(order_number)
                .build()
                .await?,
        );
    }
    Ok(groups)
}

/// Tests shifting groups down to make room for an insert.
///
/// Expected: Ok with groups from the insert point on moved by one
#[tokio::test]
async fn shifts_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    groups(db, mission.uid, 3).await?;

    let repo = SlotGroupRepository::new(db);
    repo.shift_orders(mission.uid, 2, None, 1, None).await?;

    let orders: Vec<_> = repo
        .get_by_mission(mission.uid)
        .await?
        .iter()
        .map(|g| g.order_number)
        .collect();
    assert_eq!(orders, vec![1, 3, 4]);

    Ok(())
}

/// Tests a bounded shift that skips the moved group.
///
/// Expected: Ok with only groups inside the range shifted
#[tokio::test]
async fn shifts_bounded_range_excluding() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_slotlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let mission = factory::create_mission(db, creator.uid).await?;
    let created = groups(db, mission.uid, 4).await?;

    // Move group 1 to position 3.
    let repo = SlotGroupRepository::new(db);
    repo.shift_orders(mission.uid, 2, Some(3), -1, Some(created[0].uid))
        .await?;
    repo.update(
        created[0].uid,
        UpdateSlotGroupParams {
            order_number: Some(3),
            ..Default::default()
        },
    )
    .await?;

    let order: Vec<_> = repo
        .get_by_mission(mission.uid)
        .await?
        .iter()
        .map(|g| g.uid)
        .collect();
    assert_eq!(
        order,
        vec![created[1].uid, created[2].uid, created[0].uid, created[3].uid]
    );

    Ok(())
}
