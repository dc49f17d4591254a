use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::api::PaginationDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub uid: Uuid,
    pub notification_type: String,
    pub title: Option<String>,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub additional_data: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationListDto {
    pub notifications: Vec<NotificationDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponseDto {
    pub notification: NotificationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkedReadDto {
    /// Number of notifications that were unread.
    pub updated: u64,
}
