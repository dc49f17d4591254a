//! Slot group and slot management.
//!
//! Order numbers are kept contiguous from 1 within a mission (groups) or a group
//! (slots). Inserting after position `n` places the new row at `n + 1` and moves
//! everything from there on down by one; moving a row shifts the rows it passes;
//! deleting closes the gap. Every reordering runs in a single transaction.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::server::{
    data::{
        community::CommunityRepository, notification::NotificationRepository,
        registration::RegistrationRepository, slot::SlotRepository,
        slot_group::SlotGroupRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        notification::{CreateNotificationParams, SLOT_ASSIGNED, SLOT_UNASSIGNED},
        slot::{
            CreateSlotGroupParams, CreateSlotParams, NewSlot, Slot, SlotGroup,
            UpdateSlotGroupParams, UpdateSlotParams,
        },
    },
    util::dlc::validate_dlcs,
};

pub struct SlotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the mission's slot groups with their slots, both ordered by order number.
    pub async fn get_slotlist(&self, mission_uid: Uuid) -> Result<Vec<SlotGroup>, AppError> {
        let groups = SlotGroupRepository::new(self.db)
            .get_by_mission(mission_uid)
            .await?;

        let slot_repo = SlotRepository::new(self.db);
        let slots = slot_repo
            .get_by_groups(groups.iter().map(|g| g.uid).collect())
            .await?;
        let slots = slot_repo.hydrate(slots).await?;

        let mut by_group: HashMap<Uuid, Vec<Slot>> = HashMap::new();
        for slot in slots {
            by_group.entry(slot.slot_group_uid).or_default().push(slot);
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let slots = by_group.remove(&group.uid).unwrap_or_default();
                SlotGroup::from_entity(group, slots)
            })
            .collect())
    }

    /// Inserts a slot group after position `insert_after`.
    ///
    /// # Arguments
    /// - `params` - Mission, title, description and insert position
    ///
    /// # Returns
    /// - `Ok(SlotGroup)` - The new, empty group with order number `insert_after + 1`
    /// - `Err(AppError::DbErr)` - Database error; nothing was shifted
    pub async fn create_slot_group(
        &self,
        params: CreateSlotGroupParams,
    ) -> Result<SlotGroup, AppError> {
        let order_number = params.insert_after.max(0) + 1;
        let description = Some(params.description).filter(|d| !d.is_empty());

        let txn = self.db.begin().await?;
        let group_repo = SlotGroupRepository::new(&txn);
        group_repo
            .shift_orders(params.mission_uid, order_number, None, 1, None)
            .await?;
        let group = group_repo
            .create(
                None,
                params.mission_uid,
                params.title,
                description,
                order_number,
            )
            .await?;
        txn.commit().await?;

        Ok(SlotGroup::from_entity(group, Vec::new()))
    }

    /// Updates a slot group, moving it and its neighbours when the order number changes.
    pub async fn update_slot_group(
        &self,
        mission_uid: Uuid,
        group_uid: Uuid,
        mut params: UpdateSlotGroupParams,
    ) -> Result<SlotGroup, AppError> {
        let group = self.find_slot_group(mission_uid, group_uid).await?;

        let txn = self.db.begin().await?;
        let group_repo = SlotGroupRepository::new(&txn);

        if let Some(target) = params.order_number {
            let count = group_repo.get_by_mission(mission_uid).await?.len() as i32;
            let target = target.clamp(1, count.max(1));
            move_within(group.order_number, target, |from, to, delta| {
                group_repo.shift_orders(mission_uid, from, Some(to), delta, Some(group_uid))
            })
            .await?;
            params.order_number = Some(target);
        }

        let Some(updated) = group_repo.update(group_uid, params).await? else {
            return Err(AppError::NotFound("Slot group not found".to_string()));
        };
        txn.commit().await?;

        let slot_repo = SlotRepository::new(self.db);
        let slots = slot_repo.get_by_groups(vec![group_uid]).await?;

        Ok(SlotGroup::from_entity(updated, slot_repo.hydrate(slots).await?))
    }

    /// Deletes a slot group with its slots and closes the gap in the ordering.
    pub async fn delete_slot_group(&self, mission_uid: Uuid, group_uid: Uuid) -> Result<(), AppError> {
        let group = self.find_slot_group(mission_uid, group_uid).await?;

        let txn = self.db.begin().await?;
        let group_repo = SlotGroupRepository::new(&txn);
        group_repo.delete(group_uid).await?;
        group_repo
            .shift_orders(mission_uid, group.order_number + 1, None, -1, None)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    /// Creates slots, each inserted after position `insert_after` of its group.
    ///
    /// All slots are validated before anything is written and the whole batch is
    /// created in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - Created slots in request order
    /// - `Err(AppError::BadRequest)` - Invalid DLCs or unknown restricted community
    /// - `Err(AppError::NotFound)` - A slot group is not part of the mission
    pub async fn create_slots(
        &self,
        mission_uid: Uuid,
        slots: Vec<CreateSlotParams>,
    ) -> Result<Vec<Slot>, AppError> {
        for slot in &slots {
            self.find_slot_group(mission_uid, slot.slot_group_uid)
                .await?;
            validate_dlcs(&slot.required_dlcs)?;
            self.ensure_community(slot.restricted_community_uid).await?;
        }

        let txn = self.db.begin().await?;
        let slot_repo = SlotRepository::new(&txn);
        let mut created = Vec::with_capacity(slots.len());
        for params in slots {
            let order_number = params.insert_after.max(0) + 1;
            slot_repo
                .shift_orders(params.slot_group_uid, order_number, None, 1, None)
                .await?;
            created.push(
                slot_repo
                    .create(NewSlot::from_params(params, order_number))
                    .await?,
            );
        }
        txn.commit().await?;

        Ok(SlotRepository::new(self.db).hydrate(created).await?)
    }

    /// Updates a slot, moving it and its neighbours when the order number changes.
    pub async fn update_slot(
        &self,
        mission_uid: Uuid,
        slot_uid: Uuid,
        mut params: UpdateSlotParams,
    ) -> Result<Slot, AppError> {
        let slot = self.find_slot(mission_uid, slot_uid).await?;
        if let Some(dlcs) = &params.required_dlcs {
            validate_dlcs(dlcs)?;
        }
        self.ensure_community(params.restricted_community_uid)
            .await?;

        let txn = self.db.begin().await?;
        let slot_repo = SlotRepository::new(&txn);

        if let Some(target) = params.order_number {
            let count = slot_repo.get_by_groups(vec![slot.slot_group_uid]).await?.len() as i32;
            let target = target.clamp(1, count.max(1));
            let group_uid = slot.slot_group_uid;
            move_within(slot.order_number, target, |from, to, delta| {
                slot_repo.shift_orders(group_uid, from, Some(to), delta, Some(slot_uid))
            })
            .await?;
            params.order_number = Some(target);
        }

        let Some(updated) = slot_repo.update(slot_uid, params).await? else {
            return Err(AppError::NotFound("Slot not found".to_string()));
        };
        txn.commit().await?;

        self.hydrate_one(updated).await
    }

    /// Deletes a slot with its registrations and closes the gap in the ordering.
    pub async fn delete_slot(&self, mission_uid: Uuid, slot_uid: Uuid) -> Result<(), AppError> {
        let slot = self.find_slot(mission_uid, slot_uid).await?;

        let txn = self.db.begin().await?;
        let slot_repo = SlotRepository::new(&txn);
        slot_repo.delete(slot_uid).await?;
        slot_repo
            .shift_orders(slot.slot_group_uid, slot.order_number + 1, None, -1, None)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    /// Assigns a registered user to a slot.
    ///
    /// Any registration of the user for this slot is removed and the user is notified.
    ///
    /// # Arguments
    /// - `mission` - Mission owning the slot
    /// - `slot_uid` - Slot to assign
    /// - `user_uid` - User to assign
    /// - `force` - Replace an existing assignee
    ///
    /// # Returns
    /// - `Ok(Slot)` - The updated slot
    /// - `Err(AppError::Conflict)` - Slot already assigned and `force` not set
    /// - `Err(AppError::NotFound)` - Unknown slot or user
    pub async fn assign(
        &self,
        mission: &entity::mission::Model,
        slot_uid: Uuid,
        user_uid: Uuid,
        force: bool,
    ) -> Result<Slot, AppError> {
        let slot = self.find_slot(mission.uid, slot_uid).await?;
        if !UserRepository::new(self.db).exists(user_uid).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if slot.assignee_uid.is_some() && slot.assignee_uid != Some(user_uid) && !force {
            return Err(AppError::Conflict("Slot is already assigned".to_string()));
        }

        let txn = self.db.begin().await?;
        let updated = SlotRepository::new(&txn)
            .set_assignee(slot_uid, Some(user_uid))
            .await?;
        RegistrationRepository::new(&txn)
            .delete_by_user_and_slot(user_uid, slot_uid)
            .await?;
        notify_slot(&txn, user_uid, SLOT_ASSIGNED, mission, &updated).await?;
        txn.commit().await?;

        tracing::info!("Assigned user {} to slot {}", user_uid, slot_uid);

        self.hydrate_one(updated).await
    }

    /// Removes the assignee from a slot.
    ///
    /// The former assignee is notified unless they unassigned themselves.
    ///
    /// # Returns
    /// - `Ok(Slot)` - The updated slot
    /// - `Err(AppError::BadRequest)` - The slot is not assigned
    pub async fn unassign(
        &self,
        mission: &entity::mission::Model,
        slot_uid: Uuid,
        actor_uid: Uuid,
    ) -> Result<Slot, AppError> {
        let slot = self.find_slot(mission.uid, slot_uid).await?;
        let Some(assignee_uid) = slot.assignee_uid else {
            return Err(AppError::BadRequest("Slot is not assigned".to_string()));
        };

        let txn = self.db.begin().await?;
        let updated = SlotRepository::new(&txn).set_assignee(slot_uid, None).await?;
        if assignee_uid != actor_uid {
            notify_slot(&txn, assignee_uid, SLOT_UNASSIGNED, mission, &updated).await?;
        }
        txn.commit().await?;

        self.hydrate_one(updated).await
    }

    /// Finds a slot, requiring it to belong to the mission.
    pub async fn find_slot(
        &self,
        mission_uid: Uuid,
        slot_uid: Uuid,
    ) -> Result<entity::mission_slot::Model, AppError> {
        let not_found = || AppError::NotFound("Slot not found".to_string());

        let slot = SlotRepository::new(self.db)
            .find_by_uid(slot_uid)
            .await?
            .ok_or_else(not_found)?;
        self.find_slot_group(mission_uid, slot.slot_group_uid)
            .await
            .map_err(|_| not_found())?;

        Ok(slot)
    }

    pub async fn hydrate_one(&self, slot: entity::mission_slot::Model) -> Result<Slot, AppError> {
        SlotRepository::new(self.db)
            .hydrate(vec![slot])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Slot could not be loaded".to_string()))
    }

    async fn find_slot_group(
        &self,
        mission_uid: Uuid,
        group_uid: Uuid,
    ) -> Result<entity::mission_slot_group::Model, AppError> {
        match SlotGroupRepository::new(self.db).find_by_uid(group_uid).await? {
            Some(group) if group.mission_uid == mission_uid => Ok(group),
            _ => Err(AppError::NotFound("Slot group not found".to_string())),
        }
    }

    async fn ensure_community(&self, community_uid: Option<Uuid>) -> Result<(), AppError> {
        let Some(community_uid) = community_uid else {
            return Ok(());
        };

        if CommunityRepository::new(self.db)
            .find_by_uid(community_uid)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Community {} does not exist",
                community_uid
            )));
        }

        Ok(())
    }
}

/// Shifts the rows between `current` and `target` to make room for a moved row.
///
/// Moving up (`target < current`) pushes `target..=current-1` down by one; moving
/// down pulls `current+1..=target` up by one.
async fn move_within<F, Fut>(current: i32, target: i32, shift: F) -> Result<(), sea_orm::DbErr>
where
    F: FnOnce(i32, i32, i32) -> Fut,
    Fut: std::future::Future<Output = Result<(), sea_orm::DbErr>>,
{
    if target < current {
        shift(target, current - 1, 1).await
    } else if target > current {
        shift(current + 1, target, -1).await
    } else {
        Ok(())
    }
}

/// Writes a slot notification for `user_uid`.
pub(crate) async fn notify_slot<C: ConnectionTrait>(
    db: &C,
    user_uid: Uuid,
    notification_type: &str,
    mission: &entity::mission::Model,
    slot: &entity::mission_slot::Model,
) -> Result<(), AppError> {
    let message = if notification_type == SLOT_ASSIGNED {
        format!(
            "You have been assigned to slot '{}' in mission '{}'",
            slot.title, mission.title
        )
    } else {
        format!(
            "You have been removed from slot '{}' in mission '{}'",
            slot.title, mission.title
        )
    };

    NotificationRepository::new(db)
        .create(CreateNotificationParams {
            user_uid,
            notification_type: notification_type.to_string(),
            title: Some(mission.title.clone()),
            message,
            additional_data: Some(json!({
                "missionSlug": mission.slug,
                "missionTitle": mission.title,
                "slotUid": slot.uid,
                "slotTitle": slot.title,
            })),
        })
        .await?;

    Ok(())
}
