//! Notification data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{
    notification::{CreateNotificationParams, Notification},
    page::{PageParams, Paginated},
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let now = Utc::now();
        let entity = entity::notification::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            user_uid: ActiveValue::Set(params.user_uid),
            notification_type: ActiveValue::Set(params.notification_type),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            additional_data: ActiveValue::Set(params.additional_data),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Lists a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_uid` - Recipient
    /// - `unread_only` - Skip notifications already marked read
    /// - `page` - Limit and offset
    pub async fn get_paginated(
        &self,
        user_uid: Uuid,
        unread_only: bool,
        page: PageParams,
    ) -> Result<Paginated<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserUid.eq(user_uid));
        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let total = query.clone().count(self.db).await?;
        let items = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(Paginated {
            items: items.into_iter().map(Notification::from_entity).collect(),
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }

    pub async fn count_unread(&self, user_uid: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserUid.eq(user_uid))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Finds a notification only if it belongs to `user_uid`.
    pub async fn find_for_user(
        &self,
        uid: Uuid,
        user_uid: Uuid,
    ) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(uid)
            .filter(entity::notification::Column::UserUid.eq(user_uid))
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Marks one of the user's notifications read. Returns `None` when it doesn't exist
    /// or belongs to someone else.
    pub async fn mark_read(&self, uid: Uuid, user_uid: Uuid) -> Result<Option<Notification>, DbErr> {
        let Some(existing) = entity::prelude::Notification::find_by_id(uid)
            .filter(entity::notification::Column::UserUid.eq(user_uid))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if existing.read {
            return Ok(Some(Notification::from_entity(existing)));
        }

        let mut active: entity::notification::ActiveModel = existing.into();
        active.read = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }

    /// Marks all of the user's unread notifications read, returning how many changed.
    pub async fn mark_all_read(&self, user_uid: Uuid) -> Result<u64, DbErr> {
        let unread = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserUid.eq(user_uid))
            .filter(entity::notification::Column::Read.eq(false))
            .all(self.db)
            .await?;
        let count = unread.len() as u64;

        let now = Utc::now();
        for notification in unread {
            let mut active: entity::notification::ActiveModel = notification.into();
            active.read = ActiveValue::Set(true);
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?;
        }

        Ok(count)
    }

    /// Deletes one of the user's notifications; returns whether a row was removed.
    pub async fn delete(&self, uid: Uuid, user_uid: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Uid.eq(uid))
            .filter(entity::notification::Column::UserUid.eq(user_uid))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
