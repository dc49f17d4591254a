//! Permission factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Grants `permission` to the user, stored lower-case like the service does.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_uid` - UID of the user receiving the permission
/// - `permission` - Dotted permission string, e.g. `admin.mission`
///
/// # Returns
/// - `Ok(entity::permission::Model)` - Created permission entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_permission(
    db: &DatabaseConnection,
    user_uid: Uuid,
    permission: &str,
) -> Result<entity::permission::Model, DbErr> {
    let now = Utc::now();
    entity::permission::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        user_uid: ActiveValue::Set(user_uid),
        permission: ActiveValue::Set(permission.to_lowercase()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
