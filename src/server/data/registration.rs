//! Slot registration data repository.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{
    page::{PageParams, Paginated},
    registration::Registration,
};

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a registration of `user_uid` for `slot_uid`.
    ///
    /// # Arguments
    /// - `uid` - Explicit uid, or `None` to generate one
    /// - `user_uid` - Registering user
    /// - `slot_uid` - Slot registered for
    /// - `comment` - Optional comment shown to mission editors
    ///
    /// # Returns
    /// - `Ok(Model)` - The created registration row
    /// - `Err(DbErr)` - Database error, including the unique (user, slot) violation
    pub async fn create(
        &self,
        uid: Option<Uuid>,
        user_uid: Uuid,
        slot_uid: Uuid,
        comment: Option<String>,
    ) -> Result<entity::mission_slot_registration::Model, DbErr> {
        let now = Utc::now();
        entity::mission_slot_registration::ActiveModel {
            uid: ActiveValue::Set(uid.unwrap_or_else(Uuid::new_v4)),
            user_uid: ActiveValue::Set(user_uid),
            slot_uid: ActiveValue::Set(slot_uid),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_uid(
        &self,
        uid: Uuid,
    ) -> Result<Option<entity::mission_slot_registration::Model>, DbErr> {
        entity::prelude::MissionSlotRegistration::find_by_id(uid)
            .one(self.db)
            .await
    }

    /// Registration row with its user attached.
    pub async fn find_hydrated(&self, uid: Uuid) -> Result<Option<Registration>, DbErr> {
        let result = entity::prelude::MissionSlotRegistration::find_by_id(uid)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(registration, user)| {
            user.map(|user| Registration::from_entity(registration, user))
        }))
    }

    pub async fn find_by_user_and_slot(
        &self,
        user_uid: Uuid,
        slot_uid: Uuid,
    ) -> Result<Option<entity::mission_slot_registration::Model>, DbErr> {
        entity::prelude::MissionSlotRegistration::find()
            .filter(entity::mission_slot_registration::Column::UserUid.eq(user_uid))
            .filter(entity::mission_slot_registration::Column::SlotUid.eq(slot_uid))
            .one(self.db)
            .await
    }

    /// Registrations for a slot, oldest first.
    pub async fn get_by_slot_paginated(
        &self,
        slot_uid: Uuid,
        page: PageParams,
    ) -> Result<Paginated<Registration>, DbErr> {
        let query = entity::prelude::MissionSlotRegistration::find()
            .filter(entity::mission_slot_registration::Column::SlotUid.eq(slot_uid));

        let total = query.clone().count(self.db).await?;
        let rows = query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::mission_slot_registration::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(Paginated {
            items: rows
                .into_iter()
                .filter_map(|(registration, user)| {
                    user.map(|user| Registration::from_entity(registration, user))
                })
                .collect(),
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    /// Number of registrations per slot; slots without registrations are absent.
    pub async fn count_by_slots(&self, slot_uids: Vec<Uuid>) -> Result<HashMap<Uuid, u64>, DbErr> {
        if slot_uids.is_empty() {
            return Ok(HashMap::new());
        }

        let slot_refs: Vec<Uuid> = entity::prelude::MissionSlotRegistration::find()
            .select_only()
            .column(entity::mission_slot_registration::Column::SlotUid)
            .filter(entity::mission_slot_registration::Column::SlotUid.is_in(slot_uids))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for slot_uid in slot_refs {
            *counts.entry(slot_uid).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Slots out of `slot_uids` the user has registered for.
    pub async fn slot_uids_for_user(
        &self,
        user_uid: Uuid,
        slot_uids: Vec<Uuid>,
    ) -> Result<HashSet<Uuid>, DbErr> {
        if slot_uids.is_empty() {
            return Ok(HashSet::new());
        }

        let uids: Vec<Uuid> = entity::prelude::MissionSlotRegistration::find()
            .select_only()
            .column(entity::mission_slot_registration::Column::SlotUid)
            .filter(entity::mission_slot_registration::Column::UserUid.eq(user_uid))
            .filter(entity::mission_slot_registration::Column::SlotUid.is_in(slot_uids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(uids.into_iter().collect())
    }

    pub async fn get_by_user(
        &self,
        user_uid: Uuid,
    ) -> Result<Vec<entity::mission_slot_registration::Model>, DbErr> {
        entity::prelude::MissionSlotRegistration::find()
            .filter(entity::mission_slot_registration::Column::UserUid.eq(user_uid))
            .all(self.db)
            .await
    }

    /// Moves a registration to another user.
    pub async fn set_user(
        &self,
        registration: entity::mission_slot_registration::Model,
        user_uid: Uuid,
    ) -> Result<entity::mission_slot_registration::Model, DbErr> {
        let mut active: entity::mission_slot_registration::ActiveModel = registration.into();
        active.user_uid = ActiveValue::Set(user_uid);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::MissionSlotRegistration::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes the user's registration for the slot, if any.
    pub async fn delete_by_user_and_slot(&self, user_uid: Uuid, slot_uid: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::MissionSlotRegistration::delete_many()
            .filter(entity::mission_slot_registration::Column::UserUid.eq(user_uid))
            .filter(entity::mission_slot_registration::Column::SlotUid.eq(slot_uid))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
