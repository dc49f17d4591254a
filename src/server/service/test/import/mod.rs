use crate::server::{
    data::{
        community::CommunityRepository, registration::RegistrationRepository,
        slot::SlotRepository, user::UserRepository,
    },
    error::{import::ImportError, AppError},
    model::import::{LegacyMissionResponse, LegacyPayload, LegacySlotsResponse},
    service::{import::ImportService, slot::SlotService},
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod import_payload;

const COMMUNITY_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0001";
const CREATOR_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0002";
const ASSIGNEE_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0003";
const GROUP_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0004";
const SLOT_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0005";
const OPEN_SLOT_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0006";
const REGISTRATION_UID: &str = "4b0a3d7c-6f51-4d6e-9a43-2f4f1c9a0007";

fn uid(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap()
}

/// Legacy payload with a community, a creator and one group of two slots.
fn payload(slug: &str) -> LegacyPayload {
    let community = json!({
        "uid": COMMUNITY_UID,
        "name": "Legacy Community",
        "tag": "LC",
        "slug": "legacy-community",
        "website": null,
        "logoUrl": null
    });
    let mission: LegacyMissionResponse = serde_json::from_value(json!({
        "mission": {
            "slug": slug,
            "title": "Legacy Op",
            "description": "Short",
            "detailedDescription": "Long",
            "startTime": "2020-01-01T18:00:00Z",
            "visibility": "public",
            "requiredDLCs": [],
            "creator": { "uid": CREATOR_UID, "nickname": "Founder", "community": community },
            "community": community
        }
    }))
    .unwrap();
    let slots: LegacySlotsResponse = serde_json::from_value(json!({
        "slotGroups": [{
            "uid": GROUP_UID,
            "title": "Alpha",
            "description": null,
            "orderNumber": 1,
            "slots": [
                {
                    "uid": SLOT_UID,
                    "title": "Lead",
                    "orderNumber": 1,
                    "assignee": { "uid": ASSIGNEE_UID, "nickname": "Rifleman", "community": null },
                    "registrationUid": REGISTRATION_UID
                },
                {
                    "uid": OPEN_SLOT_UID,
                    "title": "Medic",
                    "orderNumber": 2
                }
            ]
        }]
    }))
    .unwrap();

    LegacyPayload {
        mission: mission.mission,
        slot_groups: slots.slot_groups,
    }
}
