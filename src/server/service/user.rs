//! User service for profiles and user administration.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        mission::{MissionListItem, MissionListParams, MissionViewer},
        page::{PageParams, Paginated},
        user::{UpdateUserParams, User},
    },
    service::mission::MissionService,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users ordered by nickname.
    ///
    /// # Arguments
    /// - `search` - Optional nickname substring
    /// - `page` - Limit and offset
    pub async fn list(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> Result<Paginated<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_paginated(search, page)
            .await?)
    }

    pub async fn get(&self, uid: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(not_found)
    }

    /// Applies a profile update.
    ///
    /// # Arguments
    /// - `uid` - User to update
    /// - `params` - Fields to change
    /// - `is_admin` - Caller holds `admin.user`; required to change `active`
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Forbidden)` - Non-admin tried to change `active`
    /// - `Err(AppError::BadRequest)` - Empty nickname
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn update(
        &self,
        uid: Uuid,
        mut params: UpdateUserParams,
        is_admin: bool,
    ) -> Result<User, AppError> {
        if params.active.is_some() && !is_admin {
            return Err(AppError::Forbidden(
                "Only user administrators may change the active flag".to_string(),
            ));
        }
        if let Some(nickname) = params.nickname.take() {
            let nickname = nickname.trim().to_string();
            if nickname.is_empty() {
                return Err(AppError::BadRequest(
                    "Nickname must not be empty".to_string(),
                ));
            }
            params.nickname = Some(nickname);
        }

        let user = UserRepository::new(self.db)
            .update(uid, params)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Updated user {}", uid);

        Ok(user)
    }

    pub async fn delete(&self, uid: Uuid) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        if !user_repo.exists(uid).await? {
            return Err(not_found());
        }

        user_repo.delete(uid).await?;
        tracing::info!("Deleted user {}", uid);

        Ok(())
    }

    /// Missions created by the user that `viewer` may see.
    pub async fn missions(
        &self,
        uid: Uuid,
        viewer: &MissionViewer,
        page: PageParams,
        include_ended: bool,
    ) -> Result<Paginated<MissionListItem>, AppError> {
        if !UserRepository::new(self.db).exists(uid).await? {
            return Err(not_found());
        }

        let mut params = MissionListParams::new(page.limit, page.offset);
        params.include_ended = include_ended;
        params.creator_uid = Some(uid);

        MissionService::new(self.db).list(params, viewer).await
    }
}

fn not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
