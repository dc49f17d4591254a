use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PermissionDto {
    pub uid: Uuid,
    pub permission: String,
}

/// Permission together with the user holding it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrantedPermissionDto {
    pub uid: Uuid,
    pub permission: String,
    pub user: UserSummaryDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GrantedPermissionListDto {
    pub permissions: Vec<GrantedPermissionDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GrantedPermissionResponseDto {
    pub permission: GrantedPermissionDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePermissionDto {
    pub permission: String,
}

/// Grants `permission` to the user identified by `userUid`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrantPermissionDto {
    pub user_uid: Uuid,
    pub permission: String,
}
