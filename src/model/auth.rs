use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::community::CommunityDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SteamLoginUrlDto {
    pub url: String,
}

/// Callback URL Steam redirected the browser to, query string included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SteamLoginDto {
    pub url: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ReturnUrlQuery {
    pub return_url: Option<String>,
}

/// Community reference carried in token payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenCommunityDto {
    pub uid: Uuid,
    pub name: String,
    pub tag: String,
    pub slug: String,
}

/// User as embedded in the JWT payload and login responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenUserDto {
    pub uid: Uuid,
    pub nickname: String,
    pub steam_id: String,
    pub community: Option<TokenCommunityDto>,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user: TokenUserDto,
}

/// The caller's own account including private fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub uid: Uuid,
    pub nickname: String,
    pub steam_id: String,
    pub active: bool,
    pub community: Option<CommunityDto>,
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponseDto {
    pub user: AccountDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountUpdatedDto {
    pub user: AccountDto,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateAccountDto {
    pub nickname: String,
}

/// Deleting an account requires repeating the current nickname.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAccountDto {
    pub nickname: String,
}
