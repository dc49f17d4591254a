//! Permission data repository.
//!
//! Permission strings are stored lower-case; every lookup lower-cases its input.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::permission::{GrantedPermission, Permission};

pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the user's permission rows ordered by permission string.
    pub async fn get_by_user(&self, user_uid: Uuid) -> Result<Vec<Permission>, DbErr> {
        let entities = entity::prelude::Permission::find()
            .filter(entity::permission::Column::UserUid.eq(user_uid))
            .order_by_asc(entity::permission::Column::Permission)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }

    /// Returns only the permission strings held by the user.
    pub async fn get_strings(&self, user_uid: Uuid) -> Result<Vec<String>, DbErr> {
        Ok(self
            .get_by_user(user_uid)
            .await?
            .into_iter()
            .map(|p| p.permission)
            .collect())
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Permission>, DbErr> {
        let entity = entity::prelude::Permission::find_by_id(uid)
            .one(self.db)
            .await?;

        Ok(entity.map(Permission::from_entity))
    }

    /// Grants a permission, returning the existing row when already held.
    ///
    /// # Arguments
    /// - `user_uid` - User receiving the permission
    /// - `permission` - Dotted permission string, stored lower-case
    ///
    /// # Returns
    /// - `Ok(Permission)` - The new or existing permission row
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, user_uid: Uuid, permission: &str) -> Result<Permission, DbErr> {
        let permission = permission.to_lowercase();

        let existing = entity::prelude::Permission::find()
            .filter(entity::permission::Column::UserUid.eq(user_uid))
            .filter(entity::permission::Column::Permission.eq(permission.as_str()))
            .one(self.db)
            .await?;
        if let Some(existing) = existing {
            return Ok(Permission::from_entity(existing));
        }

        let now = Utc::now();
        let entity = entity::permission::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            user_uid: ActiveValue::Set(user_uid),
            permission: ActiveValue::Set(permission),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Permission::from_entity(entity))
    }

    /// Lists permissions starting with `prefix` together with their holders.
    ///
    /// Used for the `community.{slug}.` and `mission.{slug}.` permission listings.
    /// The SQL `LIKE` treats `_` as a wildcard, so matches are re-checked exactly.
    pub async fn get_with_users_by_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<GrantedPermission>, DbErr> {
        let prefix = prefix.to_lowercase();
        let rows = entity::prelude::Permission::find()
            .filter(entity::permission::Column::Permission.starts_with(&prefix))
            .order_by_asc(entity::permission::Column::Permission)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|(permission, _)| permission.permission.starts_with(&prefix))
            .filter_map(|(permission, user)| {
                user.map(|user| GrantedPermission::from_entity(permission, user))
            })
            .collect())
    }

    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::Permission::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every permission starting with `prefix`, returning how many were removed.
    pub async fn delete_by_prefix(&self, prefix: &str) -> Result<u64, DbErr> {
        let prefix = prefix.to_lowercase();
        let uids: Vec<Uuid> = entity::prelude::Permission::find()
            .filter(entity::permission::Column::Permission.starts_with(&prefix))
            .all(self.db)
            .await?
            .into_iter()
            .filter(|permission| permission.permission.starts_with(&prefix))
            .map(|permission| permission.uid)
            .collect();
        if uids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Permission::delete_many()
            .filter(entity::permission::Column::Uid.is_in(uids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
