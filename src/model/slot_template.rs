use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::community::CommunityBriefDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TemplateCreatorDto {
    pub uid: Uuid,
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotTemplateDto {
    pub uid: Uuid,
    pub title: String,
    /// Slot group objects, each guaranteed to carry a `slots` array.
    #[schema(value_type = Vec<Object>)]
    pub slot_groups: Vec<serde_json::Value>,
    pub creator: TemplateCreatorDto,
    pub community: Option<CommunityBriefDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotTemplateListDto {
    pub slot_templates: Vec<SlotTemplateDto>,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotTemplateResponseDto {
    pub slot_template: SlotTemplateDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotTemplateDto {
    pub title: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub slot_groups: Vec<serde_json::Value>,
    pub community_uid: Option<Uuid>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotTemplateDto {
    pub title: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub slot_groups: Option<Vec<serde_json::Value>>,
    pub community_uid: Option<Uuid>,
}
