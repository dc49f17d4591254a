//! Slot registration factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Registers `user_uid` for `slot_uid` with an optional comment.
///
/// # Returns
/// - `Ok(entity::mission_slot_registration::Model)` - Created registration
/// - `Err(DbErr)` - Database error during insert
pub async fn create_registration(
    db: &DatabaseConnection,
    user_uid: Uuid,
    slot_uid: Uuid,
    comment: Option<&str>,
) -> Result<entity::mission_slot_registration::Model, DbErr> {
    let now = Utc::now();
    entity::mission_slot_registration::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        user_uid: ActiveValue::Set(user_uid),
        slot_uid: ActiveValue::Set(slot_uid),
        comment: ActiveValue::Set(comment.map(str::to_string)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
