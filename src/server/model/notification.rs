use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::model::notification::NotificationDto;

/// Kinds of notifications written by the services.
pub const SLOT_ASSIGNED: &str = "mission.slot.assigned";
pub const SLOT_UNASSIGNED: &str = "mission.slot.unassigned";
pub const APPLICATION_PROCESSED: &str = "community.application.processed";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub uid: Uuid,
    pub user_uid: Uuid,
    pub notification_type: String,
    pub title: Option<String>,
    pub message: String,
    pub additional_data: Option<Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            uid: entity.uid,
            user_uid: entity.user_uid,
            notification_type: entity.notification_type,
            title: entity.title,
            message: entity.message,
            additional_data: entity.additional_data,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            uid: self.uid,
            notification_type: self.notification_type,
            title: self.title,
            message: self.message,
            additional_data: self.additional_data,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_uid: Uuid,
    pub notification_type: String,
    pub title: Option<String>,
    pub message: String,
    pub additional_data: Option<Value>,
}
