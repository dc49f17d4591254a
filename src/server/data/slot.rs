//! Slot data repository.
//!
//! Works on raw slot rows for ordering and assignment; [`SlotRepository::hydrate`]
//! turns rows into domain slots with assignee, restricted community and
//! registration count attached.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::registration::RegistrationRepository,
    model::slot::{NewSlot, Slot, UpdateSlotParams},
    util::json,
};

pub struct SlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a slot without shifting neighbours.
    pub async fn create(&self, slot: NewSlot) -> Result<entity::mission_slot::Model, DbErr> {
        let now = Utc::now();
        entity::mission_slot::ActiveModel {
            uid: ActiveValue::Set(slot.uid.unwrap_or_else(Uuid::new_v4)),
            title: ActiveValue::Set(slot.title),
            description: ActiveValue::Set(slot.description),
            detailed_description: ActiveValue::Set(slot.detailed_description),
            order_number: ActiveValue::Set(slot.order_number),
            required_dlcs: ActiveValue::Set(json::from_strings(&slot.required_dlcs)),
            external_assignee: ActiveValue::Set(slot.external_assignee),
            slot_group_uid: ActiveValue::Set(slot.slot_group_uid),
            assignee_uid: ActiveValue::Set(slot.assignee_uid),
            restricted_community_uid: ActiveValue::Set(slot.restricted_community_uid),
            blocked: ActiveValue::Set(slot.blocked),
            reserve: ActiveValue::Set(slot.reserve),
            auto_assignable: ActiveValue::Set(slot.auto_assignable),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<entity::mission_slot::Model>, DbErr> {
        entity::prelude::MissionSlot::find_by_id(uid)
            .one(self.db)
            .await
    }

    /// Slots of the given groups ordered by order number.
    pub async fn get_by_groups(
        &self,
        slot_group_uids: Vec<Uuid>,
    ) -> Result<Vec<entity::mission_slot::Model>, DbErr> {
        if slot_group_uids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::MissionSlot::find()
            .filter(entity::mission_slot::Column::SlotGroupUid.is_in(slot_group_uids))
            .order_by_asc(entity::mission_slot::Column::OrderNumber)
            .all(self.db)
            .await
    }

    /// Adds `delta` to the order number of every slot of the group whose order number
    /// lies in `from..=to` (`to = None` means unbounded), skipping `exclude`.
    pub async fn shift_orders(
        &self,
        slot_group_uid: Uuid,
        from: i32,
        to: Option<i32>,
        delta: i32,
        exclude: Option<Uuid>,
    ) -> Result<(), DbErr> {
        let mut query = entity::prelude::MissionSlot::find()
            .filter(entity::mission_slot::Column::SlotGroupUid.eq(slot_group_uid))
            .filter(entity::mission_slot::Column::OrderNumber.gte(from));
        if let Some(to) = to {
            query = query.filter(entity::mission_slot::Column::OrderNumber.lte(to));
        }
        if let Some(exclude) = exclude {
            query = query.filter(entity::mission_slot::Column::Uid.ne(exclude));
        }

        for slot in query.all(self.db).await? {
            let order_number = slot.order_number + delta;
            let mut active: entity::mission_slot::ActiveModel = slot.into();
            active.order_number = ActiveValue::Set(order_number);
            active.update(self.db).await?;
        }

        Ok(())
    }

    pub async fn update(
        &self,
        uid: Uuid,
        params: UpdateSlotParams,
    ) -> Result<Option<entity::mission_slot::Model>, DbErr> {
        let Some(existing) = self.find_by_uid(uid).await? else {
            return Ok(None);
        };

        let mut active: entity::mission_slot::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(detailed_description) = params.detailed_description {
            active.detailed_description = ActiveValue::Set(Some(detailed_description));
        }
        if let Some(required_dlcs) = params.required_dlcs {
            active.required_dlcs = ActiveValue::Set(json::from_strings(&required_dlcs));
        }
        if let Some(restricted_community_uid) = params.restricted_community_uid {
            active.restricted_community_uid = ActiveValue::Set(Some(restricted_community_uid));
        }
        if let Some(external_assignee) = params.external_assignee {
            active.external_assignee = ActiveValue::Set(Some(external_assignee));
        }
        if let Some(blocked) = params.blocked {
            active.blocked = ActiveValue::Set(blocked);
        }
        if let Some(reserve) = params.reserve {
            active.reserve = ActiveValue::Set(reserve);
        }
        if let Some(auto_assignable) = params.auto_assignable {
            active.auto_assignable = ActiveValue::Set(auto_assignable);
        }
        if let Some(order_number) = params.order_number {
            active.order_number = ActiveValue::Set(order_number);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Sets or clears the registered assignee.
    pub async fn set_assignee(
        &self,
        uid: Uuid,
        assignee_uid: Option<Uuid>,
    ) -> Result<entity::mission_slot::Model, DbErr> {
        let Some(existing) = self.find_by_uid(uid).await? else {
            return Err(DbErr::RecordNotFound(format!("Slot {} not found", uid)));
        };

        let mut active: entity::mission_slot::ActiveModel = existing.into();
        active.assignee_uid = ActiveValue::Set(assignee_uid);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Moves every slot assignment from one user to another, returning the count.
    pub async fn reassign_user(&self, from_user: Uuid, to_user: Uuid) -> Result<u64, DbErr> {
        let slots = entity::prelude::MissionSlot::find()
            .filter(entity::mission_slot::Column::AssigneeUid.eq(from_user))
            .all(self.db)
            .await?;
        let count = slots.len() as u64;

        for slot in slots {
            let mut active: entity::mission_slot::ActiveModel = slot.into();
            active.assignee_uid = ActiveValue::Set(Some(to_user));
            active.update(self.db).await?;
        }

        Ok(count)
    }

    /// Number of slots the user is assigned to.
    pub async fn count_assigned(&self, user_uid: Uuid) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::MissionSlot::find()
            .filter(entity::mission_slot::Column::AssigneeUid.eq(user_uid))
            .count(self.db)
            .await
    }

    /// Deletes a slot; its registrations cascade.
    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::MissionSlot::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Converts slot rows into domain slots, preserving order.
    pub async fn hydrate(&self, slots: Vec<entity::mission_slot::Model>) -> Result<Vec<Slot>, DbErr> {
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let assignee_uids: Vec<Uuid> = slots.iter().filter_map(|s| s.assignee_uid).collect();
        let community_uids: Vec<Uuid> = slots
            .iter()
            .filter_map(|s| s.restricted_community_uid)
            .collect();
        let slot_uids: Vec<Uuid> = slots.iter().map(|s| s.uid).collect();

        let assignees: HashMap<Uuid, entity::user::Model> = if assignee_uids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Uid.is_in(assignee_uids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.uid, u))
                .collect()
        };

        let communities: HashMap<Uuid, entity::community::Model> = if community_uids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Community::find()
                .filter(entity::community::Column::Uid.is_in(community_uids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.uid, c))
                .collect()
        };

        let registration_counts = RegistrationRepository::new(self.db)
            .count_by_slots(slot_uids)
            .await?;

        Ok(slots
            .into_iter()
            .map(|slot| {
                let assignee = slot.assignee_uid.and_then(|uid| assignees.get(&uid).cloned());
                let community = slot
                    .restricted_community_uid
                    .and_then(|uid| communities.get(&uid).cloned());
                let count = registration_counts.get(&slot.uid).copied().unwrap_or(0);

                Slot::from_entity(slot, assignee, community, count)
            })
            .collect())
    }
}
