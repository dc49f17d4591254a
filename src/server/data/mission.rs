//! Mission data repository.
//!
//! Missions are hydrated with their creator and community. List queries take a
//! visibility condition built from the [`MissionViewer`] so filtering and pagination
//! both happen in the database.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::mission::MissionVisibility,
    server::{
        model::{
            mission::{
                CreateMissionParams, Mission, MissionListParams, MissionViewer,
                UpdateMissionParams,
            },
            page::Paginated,
        },
        util::{json, tech_support},
    },
};

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a mission.
    ///
    /// # Arguments
    /// - `uid` - Explicit uid, or `None` to generate one
    /// - `params` - Mission fields with defaults resolved
    ///
    /// # Returns
    /// - `Ok(Mission)` - The created mission with creator and community
    /// - `Err(DbErr)` - Database error, including unique slug violations
    pub async fn create(
        &self,
        uid: Option<Uuid>,
        params: CreateMissionParams,
    ) -> Result<Mission, DbErr> {
        let now = Utc::now();
        let entity = entity::mission::ActiveModel {
            uid: ActiveValue::Set(uid.unwrap_or_else(Uuid::new_v4)),
            slug: ActiveValue::Set(params.slug),
            title: ActiveValue::Set(params.title),
            short_description: ActiveValue::Set(params.short_description),
            detailed_description: ActiveValue::Set(params.detailed_description),
            collapsed_description: ActiveValue::Set(params.collapsed_description),
            briefing_time: ActiveValue::Set(params.briefing_time),
            slotting_time: ActiveValue::Set(params.slotting_time),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            tech_support: ActiveValue::Set(params.tech_support),
            rules: ActiveValue::Set(params.rules),
            details_map: ActiveValue::Set(params.details_map),
            details_game_mode: ActiveValue::Set(params.details_game_mode),
            required_dlcs: ActiveValue::Set(json::from_strings(&params.required_dlcs)),
            banner_image_url: ActiveValue::Set(params.banner_image_url),
            game_server: ActiveValue::Set(params.game_server),
            voice_comms: ActiveValue::Set(params.voice_comms),
            repositories: ActiveValue::Set(Value::Array(params.repositories)),
            mission_token: ActiveValue::Set(None),
            creator_uid: ActiveValue::Set(params.creator_uid),
            community_uid: ActiveValue::Set(params.community_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.hydrate_one(entity).await
    }

    /// Finds a mission by slug, case-insensitively.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Mission>, DbErr> {
        match self.find_model_by_slug(slug).await? {
            Some(entity) => self.hydrate_one(entity).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Mission>, DbErr> {
        match entity::prelude::Mission::find_by_id(uid).one(self.db).await? {
            Some(entity) => self.hydrate_one(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Finds the bare mission row by slug.
    pub async fn find_model_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::mission::Model>, DbErr> {
        entity::prelude::Mission::find()
            .filter(entity::mission::Column::Slug.eq(slug.to_lowercase()))
            .one(self.db)
            .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Mission::find()
            .filter(entity::mission::Column::Slug.eq(slug.to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists missions ordered by start time, newest first.
    ///
    /// # Arguments
    /// - `params` - Paging, ended-mission and calendar window filters
    /// - `visibility` - Condition restricting the missions the viewer may see
    ///
    /// # Returns
    /// - `Ok(Paginated<Mission>)` - Requested page and total matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        params: &MissionListParams,
        visibility: Option<Condition>,
    ) -> Result<Paginated<Mission>, DbErr> {
        let mut query = entity::prelude::Mission::find();

        if let Some((start, end)) = params.window {
            query = query
                .filter(entity::mission::Column::StartTime.gte(start))
                .filter(entity::mission::Column::StartTime.lte(end));
        } else if !params.include_ended {
            query = query.filter(entity::mission::Column::EndTime.gte(Utc::now()));
        }
        if let Some(creator_uid) = params.creator_uid {
            query = query.filter(entity::mission::Column::CreatorUid.eq(creator_uid));
        }
        if let Some(community_uid) = params.community_uid {
            query = query.filter(entity::mission::Column::CommunityUid.eq(community_uid));
        }
        if let Some(visibility) = visibility {
            query = query.filter(visibility);
        }

        let total = query.clone().count(self.db).await?;
        let mut query = query.order_by_desc(entity::mission::Column::StartTime);
        if params.window.is_none() {
            query = query.offset(params.offset).limit(params.limit);
        }
        let entities = query.all(self.db).await?;

        Ok(Paginated {
            items: self.hydrate(entities).await?,
            total,
            limit: params.limit,
            offset: params.offset,
        })
    }

    /// Applies a partial update.
    ///
    /// Tech support flags are merged into the free-text column; an explicit
    /// `tech_support` value wins.
    pub async fn update(
        &self,
        uid: Uuid,
        params: UpdateMissionParams,
    ) -> Result<Option<Mission>, DbErr> {
        let Some(existing) = entity::prelude::Mission::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let tech = tech_support::merge(
            existing.tech_support.clone(),
            params.tech_support,
            params.tech_teleport,
            params.tech_respawn,
        );

        let mut active: entity::mission::ActiveModel = existing.into();
        active.tech_support = ActiveValue::Set(tech);
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(short_description) = params.short_description {
            active.short_description = ActiveValue::Set(short_description);
        }
        if let Some(detailed_description) = params.detailed_description {
            active.detailed_description = ActiveValue::Set(detailed_description);
        }
        if let Some(collapsed_description) = params.collapsed_description {
            active.collapsed_description = ActiveValue::Set(Some(collapsed_description));
        }
        if let Some(briefing_time) = params.briefing_time {
            active.briefing_time = ActiveValue::Set(briefing_time);
        }
        if let Some(slotting_time) = params.slotting_time {
            active.slotting_time = ActiveValue::Set(slotting_time);
        }
        if let Some(start_time) = params.start_time {
            active.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active.end_time = ActiveValue::Set(end_time);
        }
        if let Some(visibility) = params.visibility {
            active.visibility = ActiveValue::Set(visibility.as_str().to_string());
        }
        if let Some(rules) = params.rules {
            active.rules = ActiveValue::Set(Some(rules));
        }
        if let Some(details_map) = params.details_map {
            active.details_map = ActiveValue::Set(Some(details_map));
        }
        if let Some(details_game_mode) = params.details_game_mode {
            active.details_game_mode = ActiveValue::Set(Some(details_game_mode));
        }
        if let Some(required_dlcs) = params.required_dlcs {
            active.required_dlcs = ActiveValue::Set(json::from_strings(&required_dlcs));
        }
        if let Some(banner_image_url) = params.banner_image_url {
            active.banner_image_url = ActiveValue::Set(Some(banner_image_url));
        }
        if let Some(game_server) = params.game_server {
            active.game_server = ActiveValue::Set(Some(game_server));
        }
        if let Some(voice_comms) = params.voice_comms {
            active.voice_comms = ActiveValue::Set(Some(voice_comms));
        }
        if let Some(repositories) = params.repositories {
            active.repositories = ActiveValue::Set(Value::Array(repositories));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        self.hydrate_one(entity).await.map(Some)
    }

    /// Deletes a mission; slot groups, slots, registrations and accesses cascade.
    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::Mission::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn hydrate_one(&self, entity: entity::mission::Model) -> Result<Mission, DbErr> {
        let uid = entity.uid;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Mission {} could not be loaded", uid)))
    }

    /// Attaches creators and communities, preserving the input order.
    async fn hydrate(&self, entities: Vec<entity::mission::Model>) -> Result<Vec<Mission>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let creator_uids: Vec<Uuid> = entities.iter().map(|m| m.creator_uid).collect();
        let community_uids: Vec<Uuid> = entities.iter().filter_map(|m| m.community_uid).collect();

        let creators: HashMap<Uuid, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Uid.is_in(creator_uids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.uid, u))
            .collect();

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

        entities
            .into_iter()
            .map(|mission| {
                let creator = creators.get(&mission.creator_uid).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Creator {} of mission {} not found",
                        mission.creator_uid, mission.uid
                    ))
                })?;
                let community = mission
                    .community_uid
                    .and_then(|uid| communities.get(&uid).cloned());

                Ok(Mission::from_entity(mission, creator, community))
            })
            .collect()
    }
}

/// Builds the filter restricting missions to those `viewer` may see.
///
/// # Arguments
/// - `viewer` - Caller context
/// - `accessible` - Uids of missions with an access grant for the viewer or their community
///
/// # Returns
/// - `None` - No restriction (mission admins)
/// - `Some(Condition)` - Condition to apply to the mission query
pub fn visibility_condition(viewer: &MissionViewer, accessible: Vec<Uuid>) -> Option<Condition> {
    use entity::mission::Column;

    if viewer.is_admin {
        return None;
    }

    let mut condition =
        Condition::any().add(Column::Visibility.eq(MissionVisibility::Public.as_str()));

    if let Some(user_uid) = viewer.user_uid {
        condition = condition.add(Column::CreatorUid.eq(user_uid));
    }
    if let Some(community_uid) = viewer.community_uid {
        condition = condition.add(
            Condition::all()
                .add(Column::Visibility.eq(MissionVisibility::Community.as_str()))
                .add(Column::CommunityUid.eq(community_uid)),
        );
    }
    if !accessible.is_empty() {
        condition = condition.add(
            Condition::all()
                .add(Column::Uid.is_in(accessible))
                .add(Column::Visibility.ne(MissionVisibility::Hidden.as_str())),
        );
    }
    if !viewer.editable_slugs.is_empty() {
        condition = condition.add(Column::Slug.is_in(viewer.editable_slugs.clone()));
    }

    Some(condition)
}
