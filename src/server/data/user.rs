//! User data repository.
//!
//! Provides `UserRepository` for user records. Users are always returned together with
//! their community so profile and token payloads can be built without extra lookups.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{
    page::{PageParams, Paginated},
    user::{CreateUserParams, UpdateUserParams, User, UserSummary},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Arguments
    /// - `params` - Nickname, Steam ID and optional uid/community
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with their community
    /// - `Err(DbErr)` - Database error, including duplicate Steam IDs
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            uid: ActiveValue::Set(params.uid.unwrap_or_else(Uuid::new_v4)),
            nickname: ActiveValue::Set(params.nickname),
            steam_id: ActiveValue::Set(params.steam_id),
            community_uid: ActiveValue::Set(params.community_uid),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.with_community(entity).await
    }

    /// Finds a user by uid.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with their community
    /// - `Ok(None)` - No user with that uid
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::find_by_id(uid)
            .find_also_related(entity::prelude::Community)
            .one(self.db)
            .await?;

        Ok(result.map(|(user, community)| User::from_entity(user, community)))
    }

    pub async fn find_by_steam_id(&self, steam_id: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::find()
            .filter(entity::user::Column::SteamId.eq(steam_id))
            .find_also_related(entity::prelude::Community)
            .one(self.db)
            .await?;

        Ok(result.map(|(user, community)| User::from_entity(user, community)))
    }

    pub async fn exists(&self, uid: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(uid).count(self.db).await?;

        Ok(count > 0)
    }

    /// Loads user summaries keyed by uid; unknown uids are skipped.
    pub async fn get_summaries(&self, uids: Vec<Uuid>) -> Result<HashMap<Uuid, UserSummary>, DbErr> {
        if uids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Uid.is_in(uids))
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|u| (u.uid, UserSummary::from_entity(u)))
            .collect())
    }

    /// Lists users ordered by nickname, optionally filtered by a nickname substring.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> Result<Paginated<User>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query = query.filter(entity::user::Column::Nickname.contains(search));
        }

        let total = query.clone().count(self.db).await?;
        let items = query
            .order_by_asc(entity::user::Column::Nickname)
            .find_also_related(entity::prelude::Community)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(Paginated {
            items: items
                .into_iter()
                .map(|(user, community)| User::from_entity(user, community))
                .collect(),
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    /// Lists the members of a community ordered by nickname.
    pub async fn get_members(
        &self,
        community_uid: Uuid,
        page: PageParams,
    ) -> Result<Paginated<UserSummary>, DbErr> {
        let query = entity::prelude::User::find()
            .filter(entity::user::Column::CommunityUid.eq(community_uid));

        let total = query.clone().count(self.db).await?;
        let items = query
            .order_by_asc(entity::user::Column::Nickname)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(Paginated {
            items: items.into_iter().map(UserSummary::from_entity).collect(),
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that uid
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, uid: Uuid, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(nickname) = params.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(is_active) = params.active {
            active.active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        self.with_community(entity).await.map(Some)
    }

    /// Sets or clears the user's community.
    pub async fn set_community(&self, uid: Uuid, community_uid: Option<Uuid>) -> Result<(), DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(uid).one(self.db).await? else {
            return Err(DbErr::RecordNotFound(format!("User {} not found", uid)));
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.community_uid = ActiveValue::Set(community_uid);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user; permissions, registrations and created missions cascade.
    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(uid).exec(self.db).await?;

        Ok(())
    }

    /// Groups users sharing a nickname, oldest first within each group.
    ///
    /// Only nicknames held by more than one user are returned.
    pub async fn get_duplicate_nicknames(&self) -> Result<BTreeMap<String, Vec<User>>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .find_also_related(entity::prelude::Community)
            .all(self.db)
            .await?;

        let mut groups: BTreeMap<String, Vec<User>> = BTreeMap::new();
        for (user, community) in users {
            groups
                .entry(user.nickname.clone())
                .or_default()
                .push(User::from_entity(user, community));
        }
        groups.retain(|_, users| users.len() > 1);

        Ok(groups)
    }

    async fn with_community(&self, entity: entity::user::Model) -> Result<User, DbErr> {
        let community = match entity.community_uid {
            Some(uid) => {
                entity::prelude::Community::find_by_id(uid)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(User::from_entity(entity, community))
    }
}
