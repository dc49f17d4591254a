//! Slot group and slot domain models.
//!
//! Slot groups are ordered within a mission, slots within their group. Order numbers
//! start at 1 and stay contiguous; the services shift neighbours on insert, move and
//! delete.

use uuid::Uuid;

use crate::{
    model::slot::{
        CreateSlotDto, CreateSlotGroupDto, SlotDto, SlotGroupDto, UpdateSlotDto,
        UpdateSlotGroupDto,
    },
    server::{
        model::{community::Community, user::UserSummary},
        util::json,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub uid: Uuid,
    pub slot_group_uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub order_number: i32,
    pub required_dlcs: Vec<String>,
    pub external_assignee: Option<String>,
    pub blocked: bool,
    pub reserve: bool,
    pub auto_assignable: bool,
    pub assignee: Option<UserSummary>,
    pub restricted_community: Option<Community>,
    pub registration_count: u64,
}

impl Slot {
    pub fn from_entity(
        entity: entity::mission_slot::Model,
        assignee: Option<entity::user::Model>,
        restricted_community: Option<entity::community::Model>,
        registration_count: u64,
    ) -> Self {
        Self {
            uid: entity.uid,
            slot_group_uid: entity.slot_group_uid,
            title: entity.title,
            description: entity.description,
            detailed_description: entity.detailed_description,
            order_number: entity.order_number,
            required_dlcs: json::string_list(entity.required_dlcs),
            external_assignee: entity.external_assignee,
            blocked: entity.blocked,
            reserve: entity.reserve,
            auto_assignable: entity.auto_assignable,
            assignee: assignee.map(UserSummary::from_entity),
            restricted_community: restricted_community.map(Community::from_entity),
            registration_count,
        }
    }

    pub fn into_dto(self) -> SlotDto {
        SlotDto {
            uid: self.uid,
            slot_group_uid: self.slot_group_uid,
            title: self.title,
            description: self.description,
            detailed_description: self.detailed_description,
            order_number: self.order_number,
            required_dlcs: self.required_dlcs,
            external_assignee: self.external_assignee,
            registration_count: self.registration_count,
            blocked: self.blocked,
            reserve: self.reserve,
            auto_assignable: self.auto_assignable,
            assignee: self.assignee.map(UserSummary::into_dto),
            restricted_community: self.restricted_community.as_ref().map(Community::to_brief_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotGroup {
    pub uid: Uuid,
    pub mission_uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub order_number: i32,
    pub slots: Vec<Slot>,
}

impl SlotGroup {
    pub fn from_entity(entity: entity::mission_slot_group::Model, slots: Vec<Slot>) -> Self {
        Self {
            uid: entity.uid,
            mission_uid: entity.mission_uid,
            title: entity.title,
            description: entity.description,
            order_number: entity.order_number,
            slots,
        }
    }

    pub fn into_dto(self) -> SlotGroupDto {
        SlotGroupDto {
            uid: self.uid,
            title: self.title,
            description: self.description,
            order_number: self.order_number,
            slots: self.slots.into_iter().map(Slot::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSlotGroupParams {
    pub mission_uid: Uuid,
    pub title: String,
    pub description: String,
    pub insert_after: i32,
}

impl CreateSlotGroupParams {
    pub fn from_dto(mission_uid: Uuid, dto: CreateSlotGroupDto) -> Self {
        Self {
            mission_uid,
            title: dto.title,
            description: dto.description.unwrap_or_default(),
            insert_after: dto.insert_after,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSlotGroupParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order_number: Option<i32>,
}

impl From<UpdateSlotGroupDto> for UpdateSlotGroupParams {
    fn from(dto: UpdateSlotGroupDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            order_number: dto.order_number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSlotParams {
    pub slot_group_uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub required_dlcs: Vec<String>,
    pub restricted_community_uid: Option<Uuid>,
    pub blocked: bool,
    pub reserve: bool,
    pub auto_assignable: bool,
    pub insert_after: i32,
}

impl From<CreateSlotDto> for CreateSlotParams {
    fn from(dto: CreateSlotDto) -> Self {
        Self {
            slot_group_uid: dto.slot_group_uid,
            title: dto.title,
            description: dto.description,
            detailed_description: dto.detailed_description,
            required_dlcs: dto.required_dlcs.unwrap_or_default(),
            restricted_community_uid: dto.restricted_community_uid,
            blocked: dto.blocked,
            reserve: dto.reserve,
            auto_assignable: dto.auto_assignable,
            insert_after: dto.insert_after,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSlotParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub required_dlcs: Option<Vec<String>>,
    pub restricted_community_uid: Option<Uuid>,
    pub external_assignee: Option<String>,
    pub blocked: Option<bool>,
    pub reserve: Option<bool>,
    pub auto_assignable: Option<bool>,
    pub order_number: Option<i32>,
}

impl From<UpdateSlotDto> for UpdateSlotParams {
    fn from(dto: UpdateSlotDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            detailed_description: dto.detailed_description,
            required_dlcs: dto.required_dlcs,
            restricted_community_uid: dto.restricted_community_uid,
            external_assignee: dto.external_assignee,
            blocked: dto.blocked,
            reserve: dto.reserve,
            auto_assignable: dto.auto_assignable,
            order_number: dto.order_number,
        }
    }
}

/// Row to insert into `missionSlots`, with the order number already decided.
#[derive(Debug, Clone)]
pub struct NewSlot {
    /// Explicit uid, used by the importer to keep legacy identifiers.
    pub uid: Option<Uuid>,
    pub slot_group_uid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub order_number: i32,
    pub required_dlcs: Vec<String>,
    pub external_assignee: Option<String>,
    pub assignee_uid: Option<Uuid>,
    pub restricted_community_uid: Option<Uuid>,
    pub blocked: bool,
    pub reserve: bool,
    pub auto_assignable: bool,
}

impl NewSlot {
    pub fn from_params(params: CreateSlotParams, order_number: i32) -> Self {
        Self {
            uid: None,
            slot_group_uid: params.slot_group_uid,
            title: params.title,
            description: params.description,
            detailed_description: params.detailed_description,
            order_number,
            required_dlcs: params.required_dlcs,
            external_assignee: None,
            assignee_uid: None,
            restricted_community_uid: params.restricted_community_uid,
            blocked: params.blocked,
            reserve: params.reserve,
            auto_assignable: params.auto_assignable,
        }
    }
}
