//! Community data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;
use uuid::Uuid;

use crate::server::model::{
    community::{Community, CreateCommunityParams, UpdateCommunityParams},
    page::{PageParams, Paginated},
};

pub struct CommunityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommunityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new community.
    ///
    /// # Arguments
    /// - `uid` - Explicit uid, or `None` to generate one
    /// - `params` - Community fields with the slug already resolved
    ///
    /// # Returns
    /// - `Ok(Community)` - The created community
    /// - `Err(DbErr)` - Database error, including unique slug violations
    pub async fn create(
        &self,
        uid: Option<Uuid>,
        params: CreateCommunityParams,
    ) -> Result<Community, DbErr> {
        let now = Utc::now();
        let entity = entity::community::ActiveModel {
            uid: ActiveValue::Set(uid.unwrap_or_else(Uuid::new_v4)),
            name: ActiveValue::Set(params.name),
            tag: ActiveValue::Set(params.tag),
            slug: ActiveValue::Set(params.slug),
            website: ActiveValue::Set(params.website),
            logo_url: ActiveValue::Set(params.logo_url),
            game_servers: ActiveValue::Set(Value::Array(params.game_servers)),
            voice_comms: ActiveValue::Set(Value::Array(params.voice_comms)),
            repositories: ActiveValue::Set(Value::Array(params.repositories)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Community::from_entity(entity))
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Community>, DbErr> {
        let entity = entity::prelude::Community::find_by_id(uid)
            .one(self.db)
            .await?;

        Ok(entity.map(Community::from_entity))
    }

    /// Finds a community by slug, case-insensitively.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Community>, DbErr> {
        let entity = entity::prelude::Community::find()
            .filter(entity::community::Column::Slug.eq(slug.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(Community::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Community::find()
            .filter(entity::community::Column::Slug.eq(slug.to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists communities ordered by name.
    ///
    /// # Arguments
    /// - `search` - Optional substring matched against name, tag and slug
    /// - `page` - Limit and offset
    ///
    /// # Returns
    /// - `Ok(Paginated<Community>)` - Requested page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> Result<Paginated<Community>, DbErr> {
        let mut query = entity::prelude::Community::find();

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::community::Column::Name.contains(search))
                    .add(entity::community::Column::Tag.contains(search))
                    .add(entity::community::Column::Slug.contains(search)),
            );
        }

        let total = query.clone().count(self.db).await?;
        let items = query
            .order_by_asc(entity::community::Column::Name)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(Paginated {
            items: items.into_iter().map(Community::from_entity).collect(),
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Community))` - The updated community
    /// - `Ok(None)` - No community with that uid
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        uid: Uuid,
        params: UpdateCommunityParams,
    ) -> Result<Option<Community>, DbErr> {
        let Some(existing) = entity::prelude::Community::find_by_id(uid)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::community::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(tag) = params.tag {
            active.tag = ActiveValue::Set(tag);
        }
        if let Some(website) = params.website {
            active.website = ActiveValue::Set(Some(website));
        }
        if let Some(logo_url) = params.logo_url {
            active.logo_url = ActiveValue::Set(Some(logo_url));
        }
        if let Some(game_servers) = params.game_servers {
            active.game_servers = ActiveValue::Set(Value::Array(game_servers));
        }
        if let Some(voice_comms) = params.voice_comms {
            active.voice_comms = ActiveValue::Set(Value::Array(voice_comms));
        }
        if let Some(repositories) = params.repositories {
            active.repositories = ActiveValue::Set(Value::Array(repositories));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Community::from_entity(entity)))
    }

    /// Deletes a community; members and missions keep existing with their
    /// community reference cleared by the database.
    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::Community::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
