use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::slot_template::{
        CreateSlotTemplateDto, SlotTemplateDto, TemplateCreatorDto, UpdateSlotTemplateDto,
    },
    server::{model::community::Community, util::json},
};

/// Reusable slotlist layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTemplate {
    pub uid: Uuid,
    pub title: String,
    pub slot_groups: Vec<Value>,
    pub creator_uid: Uuid,
    pub creator_nickname: String,
    pub community: Option<Community>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SlotTemplate {
    pub fn from_entity(
        entity: entity::mission_slot_template::Model,
        creator: entity::user::Model,
        community: Option<entity::community::Model>,
    ) -> Self {
        Self {
            uid: entity.uid,
            title: entity.title,
            slot_groups: normalize_slot_groups(json::list(entity.slot_groups)),
            creator_uid: creator.uid,
            creator_nickname: creator.nickname,
            community: community.map(Community::from_entity),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SlotTemplateDto {
        SlotTemplateDto {
            uid: self.uid,
            title: self.title,
            slot_groups: self.slot_groups,
            creator: TemplateCreatorDto {
                uid: self.creator_uid,
                nickname: self.creator_nickname,
            },
            community: self.community.as_ref().map(Community::to_brief_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Drops non-object entries and guarantees every group a `slots` array.
pub fn normalize_slot_groups(groups: Vec<Value>) -> Vec<Value> {
    groups
        .into_iter()
        .filter_map(|group| match group {
            Value::Object(mut map) => {
                if !map.get("slots").is_some_and(Value::is_array) {
                    map.insert("slots".to_string(), Value::Array(Vec::new()));
                }
                Some(Value::Object(map))
            }
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct CreateSlotTemplateParams {
    pub title: String,
    pub slot_groups: Vec<Value>,
    pub creator_uid: Uuid,
    pub community_uid: Option<Uuid>,
}

impl CreateSlotTemplateParams {
    pub fn from_dto(dto: CreateSlotTemplateDto, creator_uid: Uuid) -> Self {
        Self {
            title: dto.title,
            slot_groups: normalize_slot_groups(dto.slot_groups),
            creator_uid,
            community_uid: dto.community_uid,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSlotTemplateParams {
    pub title: Option<String>,
    pub slot_groups: Option<Vec<Value>>,
    pub community_uid: Option<Uuid>,
}

impl From<UpdateSlotTemplateDto> for UpdateSlotTemplateParams {
    fn from(dto: UpdateSlotTemplateDto) -> Self {
        Self {
            title: dto.title,
            slot_groups: dto.slot_groups.map(normalize_slot_groups),
            community_uid: dto.community_uid,
        }
    }
}
