//! User domain models and parameters.
//!
//! Users are identified by their Steam ID. Users created by the legacy importer carry
//! a placeholder Steam ID prefixed with [`IMPORTED_STEAM_ID_PREFIX`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::{
        auth::{AccountDto, TokenUserDto},
        user::{UpdateUserDto, UserDto, UserSummaryDto},
    },
    server::model::community::Community,
};

/// Steam ID prefix marking users created by the legacy importer.
pub const IMPORTED_STEAM_ID_PREFIX: &str = "imported_";

/// User with the community they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: Uuid,
    pub nickname: String,
    pub steam_id: String,
    pub community: Option<Community>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user entity and its optional community at the repository boundary.
    pub fn from_entity(
        entity: entity::user::Model,
        community: Option<entity::community::Model>,
    ) -> Self {
        Self {
            uid: entity.uid,
            nickname: entity.nickname,
            steam_id: entity.steam_id,
            community: community.map(Community::from_entity),
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn community_uid(&self) -> Option<Uuid> {
        self.community.as_ref().map(|c| c.uid)
    }

    /// Whether the user was created by the legacy importer and never logged in.
    pub fn is_imported(&self) -> bool {
        self.steam_id.starts_with(IMPORTED_STEAM_ID_PREFIX)
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            uid: self.uid,
            nickname: self.nickname.clone(),
            steam_id: self.steam_id.clone(),
        }
    }

    /// Converts to the public profile DTO.
    ///
    /// # Arguments
    /// - `include_private` - Whether `steamId` and `active` are exposed
    pub fn into_dto(self, include_private: bool) -> UserDto {
        UserDto {
            uid: self.uid,
            nickname: self.nickname,
            steam_id: include_private.then_some(self.steam_id),
            active: include_private.then_some(self.active),
            community: self.community.map(Community::into_dto),
        }
    }

    pub fn into_account_dto(self, permissions: Vec<String>) -> AccountDto {
        AccountDto {
            uid: self.uid,
            nickname: self.nickname,
            steam_id: self.steam_id,
            active: self.active,
            community: self.community.map(Community::into_dto),
            permissions,
        }
    }

    /// User payload embedded in JWTs.
    pub fn to_token_dto(&self) -> TokenUserDto {
        TokenUserDto {
            uid: self.uid,
            nickname: self.nickname.clone(),
            steam_id: self.steam_id.clone(),
            community: self.community.as_ref().map(Community::to_token_dto),
            active: self.active,
        }
    }
}

/// Minimal user reference embedded in other resources.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub uid: Uuid,
    pub nickname: String,
    pub steam_id: String,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            uid: entity.uid,
            nickname: entity.nickname,
            steam_id: entity.steam_id,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            uid: self.uid,
            nickname: self.nickname,
            steam_id: self.steam_id,
        }
    }
}

/// Parameters for creating a user on first Steam login or during import.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Explicit uid, used by the importer to keep legacy identifiers.
    pub uid: Option<Uuid>,
    pub nickname: String,
    pub steam_id: String,
    pub community_uid: Option<Uuid>,
}

/// Partial user update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub nickname: Option<String>,
    pub active: Option<bool>,
}

impl From<UpdateUserDto> for UpdateUserParams {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            nickname: dto.nickname,
            active: dto.active,
        }
    }
}
