use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{api::PaginationDto, mission::MissionListItemDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommunityBriefDto {
    pub uid: Uuid,
    pub name: String,
    pub tag: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDto {
    pub uid: Uuid,
    pub name: String,
    pub tag: String,
    pub slug: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub game_servers: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub voice_comms: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub repositories: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityResponseDto {
    pub community: CommunityDto,
}

/// Response to community creation; the token carries the new leader permission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityCreatedDto {
    pub community: CommunityDto,
    pub token: String,
}

/// Response to community deletion; the token no longer carries community permissions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityDeletedDto {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityListDto {
    pub communities: Vec<CommunityDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityMembersDto {
    pub members: Vec<UserSummaryDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityMissionsDto {
    pub missions: Vec<MissionListItemDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunityDto {
    pub name: String,
    pub tag: String,
    pub slug: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub game_servers: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub voice_comms: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub repositories: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommunityDto {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub game_servers: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub voice_comms: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub repositories: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Submitted,
    Approved,
    Denied,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    /// Parses the stored column value; unknown values read as `Submitted`.
    pub fn from_db(value: &str) -> Self {
        match value {
            "approved" => Self::Approved,
            "denied" => Self::Denied,
            _ => Self::Submitted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub uid: Uuid,
    pub user: UserSummaryDto,
    pub community: CommunityBriefDto,
    pub status: ApplicationStatus,
    pub application_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationResponseDto {
    pub application: ApplicationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationSubmittedDto {
    pub status: ApplicationStatus,
    pub application: ApplicationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationListDto {
    pub applications: Vec<ApplicationDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationDto {
    pub application_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationDto {
    pub status: ApplicationStatus,
}
