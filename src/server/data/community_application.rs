//! Community application data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    model::community::ApplicationStatus,
    server::model::{
        community::CommunityApplication,
        page::{PageParams, Paginated},
    },
};

pub struct CommunityApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommunityApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a submitted application.
    pub async fn create(
        &self,
        user_uid: Uuid,
        community_uid: Uuid,
        application_text: String,
    ) -> Result<entity::community_application::Model, DbErr> {
        let now = Utc::now();
        entity::community_application::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            user_uid: ActiveValue::Set(user_uid),
            community_uid: ActiveValue::Set(community_uid),
            status: ActiveValue::Set(ApplicationStatus::Submitted.as_str().to_string()),
            application_text: ActiveValue::Set(application_text),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_uid(
        &self,
        uid: Uuid,
    ) -> Result<Option<entity::community_application::Model>, DbErr> {
        entity::prelude::CommunityApplication::find_by_id(uid)
            .one(self.db)
            .await
    }

    pub async fn find_by_user_and_community(
        &self,
        user_uid: Uuid,
        community_uid: Uuid,
    ) -> Result<Option<entity::community_application::Model>, DbErr> {
        entity::prelude::CommunityApplication::find()
            .filter(entity::community_application::Column::UserUid.eq(user_uid))
            .filter(entity::community_application::Column::CommunityUid.eq(community_uid))
            .one(self.db)
            .await
    }

    /// Lists a community's applications, oldest first.
    ///
    /// # Arguments
    /// - `community_uid` - Community applied to
    /// - `status` - Only return applications in this state
    /// - `page` - Limit and offset
    pub async fn get_by_community_paginated(
        &self,
        community_uid: Uuid,
        status: Option<ApplicationStatus>,
        page: PageParams,
    ) -> Result<Paginated<CommunityApplication>, DbErr> {
        let mut query = entity::prelude::CommunityApplication::find()
            .filter(entity::community_application::Column::CommunityUid.eq(community_uid));
        if let Some(status) = status {
            query = query.filter(entity::community_application::Column::Status.eq(status.as_str()));
        }

        let total = query.clone().count(self.db).await?;
        let rows = query
            .order_by_asc(entity::community_application::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(application) = self.hydrate(row).await? {
                items.push(application);
            }
        }

        Ok(Paginated {
            items,
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    pub async fn update_status(
        &self,
        application: entity::community_application::Model,
        status: ApplicationStatus,
    ) -> Result<entity::community_application::Model, DbErr> {
        let mut active: entity::community_application::ActiveModel = application.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Attaches user and community; `None` if either no longer exists.
    pub async fn hydrate(
        &self,
        application: entity::community_application::Model,
    ) -> Result<Option<CommunityApplication>, DbErr> {
        let user = entity::prelude::User::find_by_id(application.user_uid)
            .one(self.db)
            .await?;
        let community = entity::prelude::Community::find_by_id(application.community_uid)
            .one(self.db)
            .await?;

        Ok(match (user, community) {
            (Some(user), Some(community)) => Some(CommunityApplication::from_entity(
                application,
                user,
                community,
            )),
            _ => None,
        })
    }
}
