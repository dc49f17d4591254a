//! Community and community application domain models.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::{
        auth::TokenCommunityDto,
        community::{
            ApplicationDto, ApplicationStatus, CommunityBriefDto, CommunityDto,
            CreateCommunityDto, UpdateCommunityDto,
        },
    },
    server::{model::user::UserSummary, util::json},
};

/// Gaming community with its shared server, voice and mod repository listings.
#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub uid: Uuid,
    pub name: String,
    pub tag: String,
    pub slug: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub game_servers: Vec<Value>,
    pub voice_comms: Vec<Value>,
    pub repositories: Vec<Value>,
    pub created_at: DateTime<Utc>,
}

impl Community {
    /// Converts an entity model to a community domain model at the repository boundary.
    pub fn from_entity(entity: entity::community::Model) -> Self {
        Self {
            uid: entity.uid,
            name: entity.name,
            tag: entity.tag,
            slug: entity.slug,
            website: entity.website,
            logo_url: entity.logo_url,
            game_servers: json::list(entity.game_servers),
            voice_comms: json::list(entity.voice_comms),
            repositories: json::list(entity.repositories),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommunityDto {
        CommunityDto {
            uid: self.uid,
            name: self.name,
            tag: self.tag,
            slug: self.slug,
            website: self.website,
            logo_url: self.logo_url,
            game_servers: self.game_servers,
            voice_comms: self.voice_comms,
            repositories: self.repositories,
        }
    }

    pub fn to_brief_dto(&self) -> CommunityBriefDto {
        CommunityBriefDto {
            uid: self.uid,
            name: self.name.clone(),
            tag: self.tag.clone(),
            slug: self.slug.clone(),
        }
    }

    /// Community reference as embedded in JWT payloads.
    pub fn to_token_dto(&self) -> TokenCommunityDto {
        TokenCommunityDto {
            uid: self.uid,
            name: self.name.clone(),
            tag: self.tag.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Parameters for creating a community.
///
/// `slug` is already resolved; the service falls back to the slugified name.
#[derive(Debug, Clone)]
pub struct CreateCommunityParams {
    pub name: String,
    pub tag: String,
    pub slug: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub game_servers: Vec<Value>,
    pub voice_comms: Vec<Value>,
    pub repositories: Vec<Value>,
}

impl CreateCommunityParams {
    pub fn from_dto(dto: CreateCommunityDto, slug: String) -> Self {
        Self {
            name: dto.name,
            tag: dto.tag,
            slug,
            website: dto.website,
            logo_url: dto.logo_url,
            game_servers: dto.game_servers.unwrap_or_default(),
            voice_comms: dto.voice_comms.unwrap_or_default(),
            repositories: dto.repositories.unwrap_or_default(),
        }
    }
}

/// Partial community update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCommunityParams {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub game_servers: Option<Vec<Value>>,
    pub voice_comms: Option<Vec<Value>>,
    pub repositories: Option<Vec<Value>>,
}

impl From<UpdateCommunityDto> for UpdateCommunityParams {
    fn from(dto: UpdateCommunityDto) -> Self {
        Self {
            name: dto.name,
            tag: dto.tag,
            website: dto.website,
            logo_url: dto.logo_url,
            game_servers: dto.game_servers,
            voice_comms: dto.voice_comms,
            repositories: dto.repositories,
        }
    }
}

/// A user's request to join a community.
#[derive(Debug, Clone)]
pub struct CommunityApplication {
    pub uid: Uuid,
    pub user: UserSummary,
    pub community: Community,
    pub status: ApplicationStatus,
    pub application_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommunityApplication {
    pub fn from_entity(
        entity: entity::community_application::Model,
        user: entity::user::Model,
        community: entity::community::Model,
    ) -> Self {
        Self {
            uid: entity.uid,
            user: UserSummary::from_entity(user),
            community: Community::from_entity(community),
            status: ApplicationStatus::from_db(&entity.status),
            application_text: entity.application_text,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            uid: self.uid,
            user: self.user.into_dto(),
            community: self.community.to_brief_dto(),
            status: self.status,
            application_text: self.application_text,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
