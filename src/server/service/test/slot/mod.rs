use crate::server::{
    data::{
        notification::NotificationRepository, slot::SlotRepository, slot_group::SlotGroupRepository,
    },
    error::AppError,
    model::{
        notification::SLOT_ASSIGNED,
        page::PageParams,
        slot::{CreateSlotGroupParams, CreateSlotParams, UpdateSlotGroupParams, UpdateSlotParams},
    },
    service::slot::SlotService,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod assign;
mod create_slot_group;
mod create_slots;
mod delete_slot_group;
mod update_slot_group;
mod update_slot;

/// `(uid, order_number)` of the mission's slot groups in display order.
async fn group_orders(
    db: &DatabaseConnection,
    mission_uid: Uuid,
) -> Result<Vec<(Uuid, i32)>, AppError> {
    Ok(SlotGroupRepository::new(db)
        .get_by_mission(mission_uid)
        .await?
        .into_iter()
        .map(|g| (g.uid, g.order_number))
        .collect())
}

/// `(uid, order_number)` of the group's slots in display order.
async fn slot_orders(
    db: &DatabaseConnection,
    group_uid: Uuid,
) -> Result<Vec<(Uuid, i32)>, AppError> {
    Ok(SlotRepository::new(db)
        .get_by_groups(vec![group_uid])
        .await?
        .into_iter()
        .map(|s| (s.uid, s.order_number))
        .collect())
}

/// Creates `count` groups numbered 1..=count.
async fn seed_groups(
    db: &DatabaseConnection,
    mission_uid: Uuid,
    count: i32,
) -> Result<Vec<Uuid>, AppError> {
    let mut uids = Vec::new();
    for order_number in 1..=count {
        let group = factory::slot_group::SlotGroupFactory::new(db, mission_uid)
            .order_number(order_number)
            .build()
            .await?;
        uids.push(group.uid);
    }
    Ok(uids)
}

/// Creates `count` slots numbered 1..=count.
async fn seed_slots(
    db: &DatabaseConnection,
    group_uid: Uuid,
    count: i32,
) -> Result<Vec<Uuid>, AppError> {
    let mut uids = Vec::new();
    for order_number in 1..=count {
        let slot = factory::slot::SlotFactory::new(db, group_uid)
            .order_number(order_number)
            .build()
            .await?;
        uids.push(slot.uid);
    }
    Ok(uids)
}

fn new_slot(group_uid: Uuid, title: &str, insert_after: i32) -> CreateSlotParams {
    CreateSlotParams {
        slot_group_uid: group_uid,
        title: title.to_string(),
        description: None,
        detailed_description: None,
        required_dlcs: Vec::new(),
        restricted_community_uid: None,
        blocked: false,
        reserve: false,
        auto_assignable: false,
        insert_after,
    }
}
