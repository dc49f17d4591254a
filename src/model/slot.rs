use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{community::CommunityBriefDto, user::UserSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotDto {
    pub uid: Uuid,
    pub slot_group_uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub order_number: i32,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Vec<String>,
    pub external_assignee: Option<String>,
    pub registration_count: u64,
    pub blocked: bool,
    pub reserve: bool,
    pub auto_assignable: bool,
    pub assignee: Option<UserSummaryDto>,
    pub restricted_community: Option<CommunityBriefDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotGroupDto {
    pub uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub order_number: i32,
    pub slots: Vec<SlotDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotGroupListDto {
    pub slot_groups: Vec<SlotGroupDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotGroupResponseDto {
    pub slot_group: SlotGroupDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotGroupDto {
    pub title: String,
    pub description: Option<String>,
    /// Order number of the group to insert after, `0` for the front.
    #[serde(default)]
    pub insert_after: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotGroupDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order_number: Option<i32>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotDto {
    pub slot_group_uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Option<Vec<String>>,
    pub restricted_community_uid: Option<Uuid>,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub reserve: bool,
    #[serde(default = "default_true")]
    pub auto_assignable: bool,
    /// Order number of the slot to insert after, `0` for the front.
    #[serde(default)]
    pub insert_after: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotListDto {
    pub slots: Vec<SlotDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotResponseDto {
    pub slot: SlotDto,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Option<Vec<String>>,
    pub restricted_community_uid: Option<Uuid>,
    pub external_assignee: Option<String>,
    pub blocked: Option<bool>,
    pub reserve: Option<bool>,
    pub auto_assignable: Option<bool>,
    pub order_number: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignSlotDto {
    pub user_uid: Uuid,
    /// Replace an existing assignee instead of failing with 409.
    #[serde(default)]
    pub force: bool,
}
