//! Notification factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test notifications.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_uid: Uuid,
    notification_type: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Defaults to an unread `generic` notification created now.
    pub fn new(db: &'a DatabaseConnection, user_uid: Uuid) -> Self {
        Self {
            db,
            user_uid,
            notification_type: "generic".to_string(),
            message: "Test notification".to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = notification_type.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            user_uid: ActiveValue::Set(self.user_uid),
            notification_type: ActiveValue::Set(self.notification_type),
            title: ActiveValue::Set(None),
            message: ActiveValue::Set(self.message),
            additional_data: ActiveValue::Set(None),
            read: ActiveValue::Set(self.read),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_uid: Uuid,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_uid).build().await
}
