//! Community application factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates an application in the given status.
pub async fn create_application(
    db: &DatabaseConnection,
    user_uid: Uuid,
    community_uid: Uuid,
    status: &str,
) -> Result<entity::community_application::Model, DbErr> {
    let now = Utc::now();
    entity::community_application::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        user_uid: ActiveValue::Set(user_uid),
        community_uid: ActiveValue::Set(community_uid),
        status: ActiveValue::Set(status.to_string()),
        application_text: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
