//! Slot template data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};
use serde_json::Value;
use uuid::Uuid;

use crate::server::model::{
    page::{PageParams, Paginated},
    slot_template::{CreateSlotTemplateParams, SlotTemplate, UpdateSlotTemplateParams},
};

pub struct SlotTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotTemplateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateSlotTemplateParams,
    ) -> Result<entity::mission_slot_template::Model, DbErr> {
        let now = Utc::now();
        entity::mission_slot_template::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            creator_uid: ActiveValue::Set(params.creator_uid),
            community_uid: ActiveValue::Set(params.community_uid),
            slot_groups: ActiveValue::Set(Value::Array(params.slot_groups)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_model(
        &self,
        uid: Uuid,
    ) -> Result<Option<entity::mission_slot_template::Model>, DbErr> {
        entity::prelude::MissionSlotTemplate::find_by_id(uid)
            .one(self.db)
            .await
    }

    /// Template with creator and community attached.
    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<SlotTemplate>, DbErr> {
        match self.find_model(uid).await? {
            Some(model) => self.hydrate(vec![model]).await.map(|mut t| t.pop()),
            None => Ok(None),
        }
    }

    /// Lists all templates ordered by title.
    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<SlotTemplate>, DbErr> {
        let query = entity::prelude::MissionSlotTemplate::find();

        let total = query.clone().count(self.db).await?;
        let models = query
            .order_by_asc(entity::mission_slot_template::Column::Title)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(Paginated {
            items: self.hydrate(models).await?,
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    pub async fn update(
        &self,
        uid: Uuid,
        params: UpdateSlotTemplateParams,
    ) -> Result<Option<SlotTemplate>, DbErr> {
        let Some(existing) = self.find_model(uid).await? else {
            return Ok(None);
        };

        let mut active: entity::mission_slot_template::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(slot_groups) = params.slot_groups {
            active.slot_groups = ActiveValue::Set(Value::Array(slot_groups));
        }
        if let Some(community_uid) = params.community_uid {
            active.community_uid = ActiveValue::Set(Some(community_uid));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        let model = active.update(self.db).await?;

        self.hydrate(vec![model]).await.map(|mut t| t.pop())
    }

    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::MissionSlotTemplate::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn hydrate(
        &self,
        models: Vec<entity::mission_slot_template::Model>,
    ) -> Result<Vec<SlotTemplate>, DbErr> {
        let mut templates = Vec::with_capacity(models.len());

        for model in models {
            let Some(creator) = entity::prelude::User::find_by_id(model.creator_uid)
                .one(self.db)
                .await?
            else {
                continue;
            };
            let community = match model.community_uid {
                Some(uid) => entity::prelude::Community::find_by_id(uid).one(self.db).await?,
                None => None,
            };

            templates.push(SlotTemplate::from_entity(model, creator, community));
        }

        Ok(templates)
    }
}
