//! Mission slot templates.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{community::CommunityRepository, slot_template::SlotTemplateRepository},
    error::AppError,
    model::{
        page::{PageParams, Paginated},
        slot_template::{CreateSlotTemplateParams, SlotTemplate, UpdateSlotTemplateParams},
    },
};

pub struct SlotTemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotTemplateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, page: PageParams) -> Result<Paginated<SlotTemplate>, AppError> {
        Ok(SlotTemplateRepository::new(self.db)
            .get_paginated(page)
            .await?)
    }

    pub async fn get(&self, uid: Uuid) -> Result<SlotTemplate, AppError> {
        SlotTemplateRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a template; slot groups are normalized before storage.
    ///
    /// # Returns
    /// - `Ok(SlotTemplate)` - The created template
    /// - `Err(AppError::BadRequest)` - Empty title or unknown community
    pub async fn create(&self, params: CreateSlotTemplateParams) -> Result<SlotTemplate, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }
        self.ensure_community(params.community_uid).await?;

        let repo = SlotTemplateRepository::new(self.db);
        let model = repo.create(params).await?;

        repo.find_by_uid(model.uid).await?.ok_or_else(not_found)
    }

    /// Updates a template the caller is allowed to manage.
    ///
    /// # Arguments
    /// - `uid` - Template to update
    /// - `actor_uid` - Caller
    /// - `is_admin` - Caller holds `admin.slotTemplate`
    /// - `params` - Fields to change
    ///
    /// # Returns
    /// - `Ok(SlotTemplate)` - The updated template
    /// - `Err(AppError::Forbidden)` - Caller is neither the creator nor an admin
    /// - `Err(AppError::NotFound)` - Unknown template
    pub async fn update(
        &self,
        uid: Uuid,
        actor_uid: Uuid,
        is_admin: bool,
        params: UpdateSlotTemplateParams,
    ) -> Result<SlotTemplate, AppError> {
        self.authorize(uid, actor_uid, is_admin).await?;
        self.ensure_community(params.community_uid).await?;

        SlotTemplateRepository::new(self.db)
            .update(uid, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, uid: Uuid, actor_uid: Uuid, is_admin: bool) -> Result<(), AppError> {
        self.authorize(uid, actor_uid, is_admin).await?;

        SlotTemplateRepository::new(self.db).delete(uid).await?;

        Ok(())
    }

    async fn authorize(&self, uid: Uuid, actor_uid: Uuid, is_admin: bool) -> Result<(), AppError> {
        let Some(template) = SlotTemplateRepository::new(self.db).find_model(uid).await? else {
            return Err(not_found());
        };

        if template.creator_uid != actor_uid && !is_admin {
            return Err(AppError::Forbidden(
                "Only the creator may modify this slot template".to_string(),
            ));
        }

        Ok(())
    }

    async fn ensure_community(&self, community_uid: Option<Uuid>) -> Result<(), AppError> {
        if let Some(community_uid) = community_uid {
            if CommunityRepository::new(self.db)
                .find_by_uid(community_uid)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Community {} does not exist",
                    community_uid
                )));
            }
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Slot template not found".to_string())
}
