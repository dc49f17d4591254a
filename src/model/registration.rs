use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub uid: Uuid,
    pub slot_uid: Uuid,
    pub user: UserSummaryDto,
    pub comment: Option<String>,
    /// Pending registrations are unconfirmed; confirming deletes the row.
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListDto {
    pub registrations: Vec<RegistrationDto>,
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponseDto {
    pub registration: RegistrationDto,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRegistrationDto {
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationDto {
    pub confirmed: bool,
    #[serde(default)]
    pub suppress_notifications: bool,
}
