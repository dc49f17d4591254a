//! Payloads of the legacy slotlist API consumed by the mission importer.
//!
//! Only the fields the importer writes are modelled; everything else in the legacy
//! responses is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::model::import::{
    ImportPreviewDto, PreviewCommunityDto, PreviewMissionDto, PreviewSlotDto, PreviewSlotGroupDto,
    PreviewTotalsDto,
};

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMissionResponse {
    pub mission: LegacyMission,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySlotsResponse {
    pub slot_groups: Vec<LegacySlotGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCommunity {
    pub uid: Uuid,
    pub name: String,
    pub tag: String,
    pub slug: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyUser {
    pub uid: Uuid,
    pub nickname: String,
    pub community: Option<LegacyCommunity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMission {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: String,
    pub collapsed_description: Option<String>,
    pub briefing_time: Option<DateTime<Utc>>,
    pub slotting_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    pub tech_support: Option<String>,
    pub rules: Option<String>,
    #[serde(default, rename = "requiredDLCs")]
    pub required_dlcs: Vec<String>,
    pub banner_image_url: Option<String>,
    pub game_server: Option<Value>,
    pub voice_comms: Option<Value>,
    #[serde(default)]
    pub repositories: Vec<Value>,
    pub creator: Option<LegacyUser>,
    pub community: Option<LegacyCommunity>,
}

fn default_visibility() -> String {
    "public".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySlotGroup {
    pub uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub order_number: i32,
    #[serde(default)]
    pub slots: Vec<LegacySlot>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySlot {
    pub uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub order_number: i32,
    #[serde(default, rename = "requiredDLCs")]
    pub required_dlcs: Vec<String>,
    pub external_assignee: Option<String>,
    pub assignee: Option<LegacyUser>,
    pub restricted_community: Option<LegacyCommunity>,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub reserve: bool,
    #[serde(default = "default_true")]
    pub auto_assignable: bool,
    pub registration_uid: Option<Uuid>,
}

fn default_true() -> bool {
    true
}

/// Mission and slotlist fetched from the legacy API.
#[derive(Debug, Clone)]
pub struct LegacyPayload {
    pub mission: LegacyMission,
    pub slot_groups: Vec<LegacySlotGroup>,
}

impl LegacyPayload {
    /// Summarizes what an import of this payload would write.
    pub fn preview(&self) -> ImportPreviewDto {
        let slot_groups: Vec<PreviewSlotGroupDto> = self
            .slot_groups
            .iter()
            .map(|group| PreviewSlotGroupDto {
                title: group.title.clone(),
                slot_count: group.slots.len() as u64,
                slots: group
                    .slots
                    .iter()
                    .map(|slot| PreviewSlotDto {
                        title: slot.title.clone(),
                        assignee: preview_assignee(slot),
                    })
                    .collect(),
            })
            .collect();

        ImportPreviewDto {
            mission: PreviewMissionDto {
                title: self.mission.title.clone(),
                slug: self.mission.slug.clone(),
                description: self.mission.description.clone(),
                visibility: self.mission.visibility.clone(),
                community: self.mission.community.as_ref().map(|c| PreviewCommunityDto {
                    name: c.name.clone(),
                    slug: c.slug.clone(),
                }),
            },
            totals: PreviewTotalsDto {
                slot_groups: slot_groups.len() as u64,
                slots: slot_groups.iter().map(|g| g.slot_count).sum(),
            },
            slot_groups,
        }
    }
}

fn preview_assignee(slot: &LegacySlot) -> String {
    if let Some(assignee) = &slot.assignee {
        assignee.nickname.clone()
    } else if let Some(external) = slot.external_assignee.as_deref().filter(|e| !e.is_empty()) {
        format!("External: {}", external)
    } else {
        "Unassigned".to_string()
    }
}
