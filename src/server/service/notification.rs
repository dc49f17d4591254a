//! Notifications of the authenticated caller.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::Notification,
        page::{PageParams, Paginated},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's notifications, newest first.
    pub async fn list(
        &self,
        user_uid: Uuid,
        unread_only: bool,
        page: PageParams,
    ) -> Result<Paginated<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_paginated(user_uid, unread_only, page)
            .await?)
    }

    pub async fn unread_count(&self, user_uid: Uuid) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_uid)
            .await?)
    }

    /// Fetches one of the user's notifications; other users' notifications are not found.
    pub async fn get(&self, uid: Uuid, user_uid: Uuid) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .find_for_user(uid, user_uid)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn mark_read(&self, uid: Uuid, user_uid: Uuid) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(uid, user_uid)
            .await?
            .ok_or_else(not_found)
    }

    /// Marks every unread notification of the user as read, returning how many changed.
    pub async fn mark_all_read(&self, user_uid: Uuid) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_uid)
            .await?)
    }

    pub async fn delete(&self, uid: Uuid, user_uid: Uuid) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db)
            .delete(uid, user_uid)
            .await?
        {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Notification not found".to_string())
}
