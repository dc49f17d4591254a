use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{api::PaginationDto, community::CommunityDto, mission::MissionListItemDto};

/// Minimal user reference embedded in missions, slots and registrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub uid: Uuid,
    pub nickname: String,
    pub steam_id: String,
}

/// Public user profile.
///
/// `steamId` and `active` are only filled in for callers holding `admin.user`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub uid: Uuid,
    pub nickname: String,
    pub steam_id: Option<String>,
    pub active: Option<bool>,
    pub community: Option<CommunityDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserMissionsDto {
    pub missions: Vec<MissionListItemDto>,
    #[serde(flatten)]
    pub pagination: PaginationDto,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub nickname: Option<String>,
    pub active: Option<bool>,
}
