//! Slot group data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::slot::UpdateSlotGroupParams;

pub struct SlotGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a slot group at the given order number without shifting neighbours.
    pub async fn create(
        &self,
        uid: Option<Uuid>,
        mission_uid: Uuid,
        title: String,
        description: Option<String>,
        order_number: i32,
    ) -> Result<entity::mission_slot_group::Model, DbErr> {
        let now = Utc::now();
        entity::mission_slot_group::ActiveModel {
            uid: ActiveValue::Set(uid.unwrap_or_else(Uuid::new_v4)),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            order_number: ActiveValue::Set(order_number),
            mission_uid: ActiveValue::Set(mission_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_uid(
        &self,
        uid: Uuid,
    ) -> Result<Option<entity::mission_slot_group::Model>, DbErr> {
        entity::prelude::MissionSlotGroup::find_by_id(uid)
            .one(self.db)
            .await
    }

    /// Slot groups of a mission ordered by order number.
    pub async fn get_by_mission(
        &self,
        mission_uid: Uuid,
    ) -> Result<Vec<entity::mission_slot_group::Model>, DbErr> {
        entity::prelude::MissionSlotGroup::find()
            .filter(entity::mission_slot_group::Column::MissionUid.eq(mission_uid))
            .order_by_asc(entity::mission_slot_group::Column::OrderNumber)
            .all(self.db)
            .await
    }

    /// Slot groups belonging to any of the given missions.
    pub async fn get_by_missions(
        &self,
        mission_uids: Vec<Uuid>,
    ) -> Result<Vec<entity::mission_slot_group::Model>, DbErr> {
        if mission_uids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::MissionSlotGroup::find()
            .filter(entity::mission_slot_group::Column::MissionUid.is_in(mission_uids))
            .all(self.db)
            .await
    }

    /// Adds `delta` to the order number of every group of the mission whose order
    /// number lies in `from..=to` (`to = None` means unbounded).
    ///
    /// # Arguments
    /// - `mission_uid` - Mission whose groups are shifted
    /// - `from` - Lowest order number affected
    /// - `to` - Highest order number affected, inclusive
    /// - `delta` - Amount added to each affected order number
    /// - `exclude` - Group left untouched, typically the one being moved
    pub async fn shift_orders(
        &self,
        mission_uid: Uuid,
        from: i32,
        to: Option<i32>,
        delta: i32,
        exclude: Option<Uuid>,
    ) -> Result<(), DbErr> {
        let mut query = entity::prelude::MissionSlotGroup::find()
            .filter(entity::mission_slot_group::Column::MissionUid.eq(mission_uid))
            .filter(entity::mission_slot_group::Column::OrderNumber.gte(from));
        if let Some(to) = to {
            query = query.filter(entity::mission_slot_group::Column::OrderNumber.lte(to));
        }
        if let Some(exclude) = exclude {
            query = query.filter(entity::mission_slot_group::Column::Uid.ne(exclude));
        }

        for group in query.all(self.db).await? {
            let order_number = group.order_number + delta;
            let mut active: entity::mission_slot_group::ActiveModel = group.into();
            active.order_number = ActiveValue::Set(order_number);
            active.update(self.db).await?;
        }

        Ok(())
    }

    pub async fn update(
        &self,
        uid: Uuid,
        params: UpdateSlotGroupParams,
    ) -> Result<Option<entity::mission_slot_group::Model>, DbErr> {
        let Some(existing) = self.find_by_uid(uid).await? else {
            return Ok(None);
        };

        let mut active: entity::mission_slot_group::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(order_number) = params.order_number {
            active.order_number = ActiveValue::Set(order_number);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Deletes a slot group; its slots cascade.
    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::MissionSlotGroup::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
