use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{community::CommunityDto, user::UserSummaryDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MissionVisibility {
    Public,
    Community,
    Private,
    Hidden,
}

impl MissionVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Community => "community",
            Self::Private => "private",
            Self::Hidden => "hidden",
        }
    }

    /// Parses the stored column value; unknown values read as `Hidden`.
    pub fn from_db(value: &str) -> Self {
        match value {
            "public" => Self::Public,
            "community" => Self::Community,
            "private" => Self::Private,
            _ => Self::Hidden,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotCountsDto {
    pub total: u64,
    pub assigned: u64,
    pub external: u64,
    pub unassigned: u64,
    pub open: u64,
}

/// Mission as shown in lists and calendars.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionListItemDto {
    pub uid: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub briefing_time: DateTime<Utc>,
    pub slotting_time: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub visibility: MissionVisibility,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Vec<String>,
    pub banner_image_url: Option<String>,
    pub slot_counts: SlotCountsDto,
    pub is_assigned_to_any_slot: bool,
    pub is_registered_for_any_slot: bool,
    pub creator: UserSummaryDto,
    pub community: Option<CommunityDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MissionListDto {
    pub missions: Vec<MissionListItemDto>,
    pub total: u64,
}

/// Full mission details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionDto {
    pub uid: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub detailed_description: String,
    pub collapsed_description: Option<String>,
    pub briefing_time: DateTime<Utc>,
    pub slotting_time: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub visibility: MissionVisibility,
    pub tech_teleport: bool,
    pub tech_respawn: bool,
    pub tech_support: Option<String>,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Vec<String>,
    #[schema(value_type = Option<Object>)]
    pub game_server: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub voice_comms: Option<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub repositories: Vec<serde_json::Value>,
    pub rules_of_engagement: String,
    pub banner_image_url: Option<String>,
    pub creator: UserSummaryDto,
    pub community: Option<CommunityDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MissionResponseDto {
    pub mission: MissionDto,
}

/// Response to mission creation; the token carries `mission.{slug}.creator`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MissionCreatedDto {
    pub token: String,
    pub mission: MissionDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMissionDto {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub collapsed_description: Option<String>,
    pub briefing_time: Option<DateTime<Utc>>,
    pub slotting_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub visibility: Option<MissionVisibility>,
    pub tech_teleport: Option<bool>,
    pub tech_respawn: Option<bool>,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub game_server: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub voice_comms: Option<serde_json::Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub repositories: Option<Vec<serde_json::Value>>,
    pub rules_of_engagement: Option<String>,
    pub banner_image_url: Option<String>,
    pub community_uid: Option<Uuid>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMissionDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub collapsed_description: Option<String>,
    pub briefing_time: Option<DateTime<Utc>>,
    pub slotting_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub visibility: Option<MissionVisibility>,
    pub tech_support: Option<String>,
    pub tech_teleport: Option<bool>,
    pub tech_respawn: Option<bool>,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    #[serde(rename = "requiredDLCs")]
    pub required_dlcs: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub game_server: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub voice_comms: Option<serde_json::Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub repositories: Option<Vec<serde_json::Value>>,
    pub rules_of_engagement: Option<String>,
    pub banner_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionAccessDto {
    pub uid: Uuid,
    pub mission_uid: Uuid,
    pub user_uid: Option<Uuid>,
    pub community_uid: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MissionAccessListDto {
    pub accesses: Vec<MissionAccessDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MissionAccessResponseDto {
    pub access: MissionAccessDto,
}

/// Exactly one of `userUid` and `communityUid` must be set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMissionAccessDto {
    pub user_uid: Option<Uuid>,
    pub community_uid: Option<Uuid>,
}
