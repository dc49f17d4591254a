//! Slot template factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a template owned by `creator_uid` with the given raw slot group list.
pub async fn create_slot_template(
    db: &DatabaseConnection,
    creator_uid: Uuid,
    slot_groups: serde_json::Value,
) -> Result<entity::mission_slot_template::Model, DbErr> {
    let now = Utc::now();
    entity::mission_slot_template::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        title: ActiveValue::Set(format!("Template {}", next_id())),
        creator_uid: ActiveValue::Set(creator_uid),
        community_uid: ActiveValue::Set(None),
        slot_groups: ActiveValue::Set(slot_groups),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
