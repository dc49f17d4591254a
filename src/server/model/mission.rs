//! Mission domain models and parameters.
//!
//! A mission is a scheduled game session with a slotlist. Besides the mission itself
//! this module holds the slot statistics shown in mission lists, the viewer context
//! used for visibility checks, and the access grants for private missions.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::mission::{
        CreateMissionDto, MissionAccessDto, MissionDto, MissionListItemDto, MissionVisibility,
        SlotCountsDto, UpdateMissionDto,
    },
    server::{
        model::{community::Community, user::UserSummary},
        util::{json, tech_support},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub uid: Uuid,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    pub collapsed_description: Option<String>,
    pub briefing_time: DateTime<Utc>,
    pub slotting_time: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub visibility: MissionVisibility,
    pub tech_support: Option<String>,
    pub rules: Option<String>,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    pub required_dlcs: Vec<String>,
    pub banner_image_url: Option<String>,
    pub game_server: Option<Value>,
    pub voice_comms: Option<Value>,
    pub repositories: Vec<Value>,
    pub creator: UserSummary,
    pub community: Option<Community>,
}

impl Mission {
    /// Converts the mission entity with its creator and community at the repository
    /// boundary.
    pub fn from_entity(
        entity: entity::mission::Model,
        creator: entity::user::Model,
        community: Option<entity::community::Model>,
    ) -> Self {
        Self {
            uid: entity.uid,
            slug: entity.slug,
            title: entity.title,
            short_description: entity.short_description,
            detailed_description: entity.detailed_description,
            collapsed_description: entity.collapsed_description,
            briefing_time: entity.briefing_time,
            slotting_time: entity.slotting_time,
            start_time: entity.start_time,
            end_time: entity.end_time,
            visibility: MissionVisibility::from_db(&entity.visibility),
            tech_support: entity.tech_support,
            rules: entity.rules,
            details_map: entity.details_map,
            details_game_mode: entity.details_game_mode,
            required_dlcs: json::string_list(entity.required_dlcs),
            banner_image_url: entity.banner_image_url,
            game_server: entity.game_server,
            voice_comms: entity.voice_comms,
            repositories: json::list(entity.repositories),
            creator: UserSummary::from_entity(creator),
            community: community.map(Community::from_entity),
        }
    }

    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            uid: self.uid,
            slug: self.slug,
            title: self.title,
            description: self.short_description.clone(),
            short_description: self.short_description,
            detailed_description: self.detailed_description,
            collapsed_description: self.collapsed_description,
            briefing_time: self.briefing_time,
            slotting_time: self.slotting_time,
            start_time: self.start_time,
            end_time: self.end_time,
            visibility: self.visibility,
            tech_teleport: tech_support::has_teleport(self.tech_support.as_deref()),
            tech_respawn: tech_support::has_respawn(self.tech_support.as_deref()),
            tech_support: self.tech_support,
            details_map: self.details_map,
            details_game_mode: self.details_game_mode,
            required_dlcs: self.required_dlcs,
            game_server: self.game_server,
            voice_comms: self.voice_comms,
            repositories: self.repositories,
            rules_of_engagement: self.rules.unwrap_or_default(),
            banner_image_url: self.banner_image_url,
            creator: self.creator.into_dto(),
            community: self.community.map(Community::into_dto),
        }
    }
}

/// Slot statistics shown per mission in lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCounts {
    pub total: u64,
    /// Slots with a registered user assigned.
    pub assigned: u64,
    /// Slots filled by a non-registered player name.
    pub external: u64,
    /// Slots with neither kind of assignee.
    pub unassigned: u64,
    /// Unassigned slots without a community restriction.
    pub open: u64,
}

impl SlotCounts {
    pub fn tally<'a>(slots: impl IntoIterator<Item = &'a entity::mission_slot::Model>) -> Self {
        let mut counts = Self::default();

        for slot in slots {
            let has_external = slot
                .external_assignee
                .as_deref()
                .is_some_and(|name| !name.is_empty());

            counts.total += 1;
            if slot.assignee_uid.is_some() {
                counts.assigned += 1;
            }
            if has_external {
                counts.external += 1;
            }
            if slot.assignee_uid.is_none() && !has_external {
                counts.unassigned += 1;
                if slot.restricted_community_uid.is_none() {
                    counts.open += 1;
                }
            }
        }

        counts
    }

    pub fn into_dto(self) -> SlotCountsDto {
        SlotCountsDto {
            total: self.total,
            assigned: self.assigned,
            external: self.external,
            unassigned: self.unassigned,
            open: self.open,
        }
    }
}

/// Mission as shown in lists, with slot statistics and the caller's involvement.
#[derive(Debug, Clone)]
pub struct MissionListItem {
    pub mission: Mission,
    pub slot_counts: SlotCounts,
    pub is_assigned_to_any_slot: bool,
    pub is_registered_for_any_slot: bool,
}

impl MissionListItem {
    pub fn into_dto(self) -> MissionListItemDto {
        let mission = self.mission;

        MissionListItemDto {
            uid: mission.uid,
            slug: mission.slug,
            title: mission.title,
            description: mission.short_description,
            briefing_time: mission.briefing_time,
            slotting_time: mission.slotting_time,
            start_time: mission.start_time,
            end_time: mission.end_time,
            visibility: mission.visibility,
            details_map: mission.details_map,
            details_game_mode: mission.details_game_mode,
            required_dlcs: mission.required_dlcs,
            banner_image_url: mission.banner_image_url,
            slot_counts: self.slot_counts.into_dto(),
            is_assigned_to_any_slot: self.is_assigned_to_any_slot,
            is_registered_for_any_slot: self.is_registered_for_any_slot,
            creator: mission.creator.into_dto(),
            community: mission.community.map(Community::into_dto),
        }
    }
}

/// Who is looking at missions, used to apply visibility rules.
#[derive(Debug, Clone, Default)]
pub struct MissionViewer {
    pub user_uid: Option<Uuid>,
    pub community_uid: Option<Uuid>,
    /// Holds `admin.mission`, a global bypass or editor rights on every slug.
    pub is_admin: bool,
    /// Slugs whose `mission.{slug}.creator` or `.editor` the viewer's permissions grant.
    pub editable_slugs: Vec<String>,
}

impl MissionViewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether the viewer may see `mission`.
    ///
    /// # Arguments
    /// - `mission` - Mission to check
    /// - `has_access` - Whether a mission access grant matches the viewer or their community
    pub fn can_view(&self, mission: &Mission, has_access: bool) -> bool {
        if self.is_admin || self.is_editor(mission) {
            return true;
        }

        match mission.visibility {
            MissionVisibility::Public => true,
            MissionVisibility::Community => {
                has_access
                    || (self.community_uid.is_some()
                        && self.community_uid == mission.community.as_ref().map(|c| c.uid))
            }
            MissionVisibility::Private => has_access,
            MissionVisibility::Hidden => false,
        }
    }

    fn is_editor(&self, mission: &Mission) -> bool {
        self.user_uid == Some(mission.creator.uid)
            || self
                .editable_slugs
                .iter()
                .any(|slug| slug.eq_ignore_ascii_case(&mission.slug))
    }
}

/// Listing parameters for `GET /missions` and the per-user and per-community lists.
#[derive(Debug, Clone)]
pub struct MissionListParams {
    pub limit: u64,
    pub offset: u64,
    /// Include missions whose end time has passed.
    pub include_ended: bool,
    /// Calendar window on `startTime`, inclusive on both ends.
    pub window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub creator_uid: Option<Uuid>,
    pub community_uid: Option<Uuid>,
}

impl MissionListParams {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit,
            offset,
            include_ended: true,
            window: None,
            creator_uid: None,
            community_uid: None,
        }
    }
}

/// Parameters for creating a mission with every default already resolved.
#[derive(Debug, Clone)]
pub struct CreateMissionParams {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    pub collapsed_description: Option<String>,
    pub briefing_time: DateTime<Utc>,
    pub slotting_time: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub visibility: MissionVisibility,
    pub tech_support: Option<String>,
    pub rules: Option<String>,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    pub required_dlcs: Vec<String>,
    pub banner_image_url: Option<String>,
    pub game_server: Option<Value>,
    pub voice_comms: Option<Value>,
    pub repositories: Vec<Value>,
    pub creator_uid: Uuid,
    pub community_uid: Option<Uuid>,
}

impl CreateMissionParams {
    /// Resolves defaults: missing times become `now`, lists become empty and the
    /// tech support column is built from the flags.
    pub fn from_dto(dto: CreateMissionDto, slug: String, creator_uid: Uuid) -> Self {
        let now = Utc::now();

        Self {
            slug,
            title: dto.title,
            short_description: dto.description.unwrap_or_default(),
            detailed_description: dto.detailed_description.unwrap_or_default(),
            collapsed_description: dto.collapsed_description,
            briefing_time: dto.briefing_time.unwrap_or(now),
            slotting_time: dto.slotting_time.unwrap_or(now),
            start_time: dto.start_time.unwrap_or(now),
            end_time: dto.end_time.unwrap_or(now),
            visibility: dto.visibility.unwrap_or(MissionVisibility::Hidden),
            tech_support: tech_support::build(
                dto.tech_teleport.unwrap_or(false),
                dto.tech_respawn.unwrap_or(false),
            ),
            rules: dto.rules_of_engagement,
            details_map: dto.details_map,
            details_game_mode: dto.details_game_mode,
            required_dlcs: dto.required_dlcs.unwrap_or_default(),
            banner_image_url: dto.banner_image_url,
            game_server: dto.game_server,
            voice_comms: dto.voice_comms,
            repositories: dto.repositories.unwrap_or_default(),
            creator_uid,
            community_uid: dto.community_uid,
        }
    }
}

/// Partial mission update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMissionParams {
    pub title: Option<String>,
    pub short_description: Option<String>,
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
    pub rules: Option<String>,
    pub details_map: Option<String>,
    pub details_game_mode: Option<String>,
    pub required_dlcs: Option<Vec<String>>,
    pub banner_image_url: Option<String>,
    pub game_server: Option<Value>,
    pub voice_comms: Option<Value>,
    pub repositories: Option<Vec<Value>>,
}

impl From<UpdateMissionDto> for UpdateMissionParams {
    fn from(dto: UpdateMissionDto) -> Self {
        Self {
            title: dto.title,
            short_description: dto.description,
            detailed_description: dto.detailed_description,
            collapsed_description: dto.collapsed_description,
            briefing_time: dto.briefing_time,
            slotting_time: dto.slotting_time,
            start_time: dto.start_time,
            end_time: dto.end_time,
            visibility: dto.visibility,
            tech_support: dto.tech_support,
            tech_teleport: dto.tech_teleport,
            tech_respawn: dto.tech_respawn,
            rules: dto.rules_of_engagement,
            details_map: dto.details_map,
            details_game_mode: dto.details_game_mode,
            required_dlcs: dto.required_dlcs,
            banner_image_url: dto.banner_image_url,
            game_server: dto.game_server,
            voice_comms: dto.voice_comms,
            repositories: dto.repositories,
        }
    }
}

/// Grant of access to a non-public mission for a user or a whole community.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionAccess {
    pub uid: Uuid,
    pub mission_uid: Uuid,
    pub user_uid: Option<Uuid>,
    pub community_uid: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl MissionAccess {
    pub fn from_entity(entity: entity::mission_access::Model) -> Self {
        Self {
            uid: entity.uid,
            mission_uid: entity.mission_uid,
            user_uid: entity.user_uid,
            community_uid: entity.community_uid,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MissionAccessDto {
        MissionAccessDto {
            uid: self.uid,
            mission_uid: self.mission_uid,
            user_uid: self.user_uid,
            community_uid: self.community_uid,
            created_at: self.created_at,
        }
    }
}
