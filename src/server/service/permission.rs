//! Permission management for admins, community leaders and mission editors.
//!
//! Community and mission endpoints manage the permissions below their own prefix
//! (`community.{slug}.`, `mission.{slug}.`); the user endpoints manage arbitrary
//! permission strings and are reserved for `admin.permission`.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::AppError,
    model::permission::{GrantedPermission, Permission},
};

pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the permissions held by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Permission>)` - Permissions ordered by permission string
    /// - `Err(AppError::NotFound)` - No user with that uid
    pub async fn user_permissions(&self, user_uid: Uuid) -> Result<Vec<Permission>, AppError> {
        self.ensure_user(user_uid).await?;

        Ok(PermissionRepository::new(self.db)
            .get_by_user(user_uid)
            .await?)
    }

    /// Grants a permission to a user, returning the existing row if already held.
    pub async fn grant(&self, user_uid: Uuid, permission: &str) -> Result<Permission, AppError> {
        let permission = permission.trim();
        if permission.is_empty() {
            return Err(AppError::BadRequest(
                "Permission must not be empty".to_string(),
            ));
        }
        self.ensure_user(user_uid).await?;

        let granted = PermissionRepository::new(self.db)
            .get_or_create(user_uid, permission)
            .await?;
        tracing::info!("Granted {} to user {}", granted.permission, user_uid);

        Ok(granted)
    }

    /// Revokes one of the user's permissions.
    ///
    /// # Returns
    /// - `Ok(())` - Permission removed
    /// - `Err(AppError::NotFound)` - No such permission for that user
    pub async fn revoke(&self, user_uid: Uuid, permission_uid: Uuid) -> Result<(), AppError> {
        let permission_repo = PermissionRepository::new(self.db);

        match permission_repo.find_by_uid(permission_uid).await? {
            Some(permission) if permission.user_uid == user_uid => {
                permission_repo.delete(permission_uid).await?;
                tracing::info!("Revoked {} from user {}", permission.permission, user_uid);
                Ok(())
            }
            _ => Err(AppError::NotFound("Permission not found".to_string())),
        }
    }

    /// Lists every permission below `prefix` with the user holding it.
    pub async fn list_scoped(&self, prefix: &str) -> Result<Vec<GrantedPermission>, AppError> {
        Ok(PermissionRepository::new(self.db)
            .get_with_users_by_prefix(prefix)
            .await?)
    }

    /// Grants an already validated scoped permission and returns it with its holder.
    pub async fn grant_scoped(
        &self,
        user_uid: Uuid,
        permission: &str,
    ) -> Result<GrantedPermission, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_uid(user_uid).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let granted = PermissionRepository::new(self.db)
            .get_or_create(user_uid, permission)
            .await?;
        tracing::info!("Granted {} to user {}", granted.permission, user_uid);

        Ok(GrantedPermission {
            uid: granted.uid,
            permission: granted.permission,
            user: user.summary(),
        })
    }

    /// Revokes a permission only if it lies below `prefix`.
    ///
    /// # Returns
    /// - `Ok(())` - Permission removed
    /// - `Err(AppError::NotFound)` - Unknown permission or one outside the prefix
    pub async fn revoke_scoped(&self, prefix: &str, permission_uid: Uuid) -> Result<(), AppError> {
        let permission_repo = PermissionRepository::new(self.db);

        match permission_repo.find_by_uid(permission_uid).await? {
            Some(permission) if permission.permission.starts_with(&prefix.to_lowercase()) => {
                permission_repo.delete(permission_uid).await?;
                tracing::info!(
                    "Revoked {} from user {}",
                    permission.permission,
                    permission.user_uid
                );
                Ok(())
            }
            _ => Err(AppError::NotFound("Permission not found".to_string())),
        }
    }

    async fn ensure_user(&self, user_uid: Uuid) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(user_uid).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
