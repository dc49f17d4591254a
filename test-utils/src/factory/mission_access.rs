//! Mission access factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Grants a user or a community access to a mission.
pub async fn create_mission_access(
    db: &DatabaseConnection,
    mission_uid: Uuid,
    user_uid: Option<Uuid>,
    community_uid: Option<Uuid>,
) -> Result<entity::mission_access::Model, DbErr> {
    let now = Utc::now();
    entity::mission_access::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        mission_uid: ActiveValue::Set(mission_uid),
        user_uid: ActiveValue::Set(user_uid),
        community_uid: ActiveValue::Set(community_uid),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
