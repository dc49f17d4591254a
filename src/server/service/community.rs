//! Community service: community lifecycle, membership applications and leader-managed
//! permissions.

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::{
    model::community::ApplicationStatus,
    server::{
        data::{
            community::CommunityRepository,
            community_application::CommunityApplicationRepository,
            notification::NotificationRepository, permission::PermissionRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            community::{
                Community, CommunityApplication, CreateCommunityParams, UpdateCommunityParams,
            },
            mission::{MissionListItem, MissionListParams, MissionViewer},
            notification::{CreateNotificationParams, APPLICATION_PROCESSED},
            page::{PageParams, Paginated},
            permission::GrantedPermission,
            user::{User, UserSummary},
        },
        service::{mission::MissionService, permission::PermissionService},
        util::{permission::is_valid_community_permission, slug::{is_valid_slug, slugify}},
    },
};

pub struct CommunityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> Result<Paginated<Community>, AppError> {
        Ok(CommunityRepository::new(self.db)
            .get_paginated(search, page)
            .await?)
    }

    pub async fn slug_available(&self, slug: &str) -> Result<bool, AppError> {
        Ok(!CommunityRepository::new(self.db).slug_exists(slug).await?)
    }

    pub async fn get(&self, slug: &str) -> Result<Community, AppError> {
        CommunityRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Creates a community led by `creator`.
    ///
    /// The creator joins the community and receives `community.{slug}.leader` in the
    /// same transaction.
    ///
    /// # Arguments
    /// - `creator` - Authenticated caller
    /// - `requested_slug` - Slug from the request, falls back to the slugified name
    /// - `params` - Community fields; `slug` is overwritten with the resolved slug
    ///
    /// # Returns
    /// - `Ok(Community)` - The created community
    /// - `Err(AppError::BadRequest)` - Slug is empty or contains characters outside the slug alphabet
    /// - `Err(AppError::Conflict)` - Slug already taken
    pub async fn create(
        &self,
        creator: &User,
        requested_slug: Option<&str>,
        mut params: CreateCommunityParams,
    ) -> Result<Community, AppError> {
        let slug = match requested_slug.map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => slug.to_lowercase(),
            None => slugify(&params.name),
        };
        if slug.is_empty() {
            return Err(AppError::BadRequest(
                "Community slug must not be empty".to_string(),
            ));
        }
        if !is_valid_slug(&slug) {
            return Err(AppError::BadRequest(format!(
                "Community slug '{}' may only contain lowercase letters, digits, '-' and '_'",
                slug
            )));
        }
        let taken = || AppError::Conflict(format!("Community slug '{}' is already taken", slug));
        if CommunityRepository::new(self.db).slug_exists(&slug).await? {
            return Err(taken());
        }
        params.slug = slug.clone();

        let txn = self.db.begin().await?;
        let community = CommunityRepository::new(&txn)
            .create(None, params)
            .await
            .map_err(|e| AppError::on_unique_violation(e, taken))?;
        UserRepository::new(&txn)
            .set_community(creator.uid, Some(community.uid))
            .await?;
        PermissionRepository::new(&txn)
            .get_or_create(creator.uid, &format!("community.{}.leader", slug))
            .await?;
        txn.commit().await?;

        tracing::info!("User {} created community {}", creator.uid, community.slug);

        Ok(community)
    }

    pub async fn update(
        &self,
        slug: &str,
        params: UpdateCommunityParams,
    ) -> Result<Community, AppError> {
        let community = self.get(slug).await?;

        CommunityRepository::new(self.db)
            .update(community.uid, params)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Deletes a community and every `community.{slug}.*` permission.
    ///
    /// Members stay but lose their community.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        let community = self.get(slug).await?;

        let txn = self.db.begin().await?;
        CommunityRepository::new(&txn).delete(community.uid).await?;
        let removed = PermissionRepository::new(&txn)
            .delete_by_prefix(&permission_prefix(&community.slug))
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Deleted community {} and {} permission(s)",
            community.slug,
            removed
        );

        Ok(())
    }

    pub async fn members(
        &self,
        slug: &str,
        page: PageParams,
    ) -> Result<Paginated<UserSummary>, AppError> {
        let community = self.get(slug).await?;

        Ok(UserRepository::new(self.db)
            .get_members(community.uid, page)
            .await?)
    }

    /// Missions of the community that `viewer` may see.
    pub async fn missions(
        &self,
        slug: &str,
        viewer: &MissionViewer,
        page: PageParams,
    ) -> Result<Paginated<MissionListItem>, AppError> {
        let community = self.get(slug).await?;

        let mut params = MissionListParams::new(page.limit, page.offset);
        params.community_uid = Some(community.uid);

        MissionService::new(self.db).list(params, viewer).await
    }

    pub async fn applications(
        &self,
        slug: &str,
        status: Option<ApplicationStatus>,
        page: PageParams,
    ) -> Result<Paginated<CommunityApplication>, AppError> {
        let community = self.get(slug).await?;

        Ok(CommunityApplicationRepository::new(self.db)
            .get_by_community_paginated(community.uid, status, page)
            .await?)
    }

    /// Submits an application to join the community.
    ///
    /// # Returns
    /// - `Ok(CommunityApplication)` - The submitted application
    /// - `Err(AppError::Conflict)` - Already a member or already applied
    /// - `Err(AppError::NotFound)` - Unknown community
    pub async fn apply(
        &self,
        slug: &str,
        user: &User,
        application_text: Option<String>,
    ) -> Result<CommunityApplication, AppError> {
        let community = self.get(slug).await?;

        if user.community_uid() == Some(community.uid) {
            return Err(AppError::Conflict(
                "Already a member of this community".to_string(),
            ));
        }

        let duplicate = || AppError::Conflict("Already applied to this community".to_string());
        let application_repo = CommunityApplicationRepository::new(self.db);
        if application_repo
            .find_by_user_and_community(user.uid, community.uid)
            .await?
            .is_some()
        {
            return Err(duplicate());
        }

        let application = application_repo
            .create(user.uid, community.uid, application_text.unwrap_or_default())
            .await
            .map_err(|e| AppError::on_unique_violation(e, duplicate))?;

        self.hydrate(application).await
    }

    /// The caller's own application to the community.
    pub async fn application_status(
        &self,
        slug: &str,
        user_uid: Uuid,
    ) -> Result<CommunityApplication, AppError> {
        let community = self.get(slug).await?;

        let Some(application) = CommunityApplicationRepository::new(self.db)
            .find_by_user_and_community(user_uid, community.uid)
            .await?
        else {
            return Err(AppError::NotFound("Application not found".to_string()));
        };

        self.hydrate(application).await
    }

    /// Approves or denies an application.
    ///
    /// Approval makes the applicant a member. The applicant is notified either way.
    ///
    /// # Returns
    /// - `Ok(CommunityApplication)` - The processed application
    /// - `Err(AppError::BadRequest)` - Status is neither approved nor denied
    /// - `Err(AppError::NotFound)` - Unknown community or application
    pub async fn process_application(
        &self,
        slug: &str,
        application_uid: Uuid,
        status: ApplicationStatus,
    ) -> Result<CommunityApplication, AppError> {
        if status == ApplicationStatus::Submitted {
            return Err(AppError::BadRequest(
                "Status must be approved or denied".to_string(),
            ));
        }

        let community = self.get(slug).await?;
        let application = match CommunityApplicationRepository::new(self.db)
            .find_by_uid(application_uid)
            .await?
        {
            Some(application) if application.community_uid == community.uid => application,
            _ => return Err(AppError::NotFound("Application not found".to_string())),
        };
        let applicant_uid = application.user_uid;

        let txn = self.db.begin().await?;
        let application = CommunityApplicationRepository::new(&txn)
            .update_status(application, status)
            .await?;
        if status == ApplicationStatus::Approved {
            UserRepository::new(&txn)
                .set_community(applicant_uid, Some(community.uid))
                .await?;
        }
        NotificationRepository::new(&txn)
            .create(CreateNotificationParams {
                user_uid: applicant_uid,
                notification_type: APPLICATION_PROCESSED.to_string(),
                title: Some(community.name.clone()),
                message: format!(
                    "Your application to {} has been {}",
                    community.name,
                    status.as_str()
                ),
                additional_data: Some(json!({
                    "communitySlug": community.slug,
                    "communityName": community.name,
                    "status": status.as_str(),
                })),
            })
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Application {} to {} {}",
            application_uid,
            community.slug,
            status.as_str()
        );

        self.hydrate(application).await
    }

    pub async fn list_permissions(&self, slug: &str) -> Result<Vec<GrantedPermission>, AppError> {
        let community = self.get(slug).await?;

        PermissionService::new(self.db)
            .list_scoped(&permission_prefix(&community.slug))
            .await
    }

    /// Grants a community permission; only `leader` and `recruitment` are grantable.
    pub async fn grant_permission(
        &self,
        slug: &str,
        user_uid: Uuid,
        permission: &str,
    ) -> Result<GrantedPermission, AppError> {
        let community = self.get(slug).await?;
        if !is_valid_community_permission(&community.slug, permission) {
            return Err(AppError::BadRequest(format!(
                "Invalid community permission '{}'",
                permission
            )));
        }

        PermissionService::new(self.db)
            .grant_scoped(user_uid, permission)
            .await
    }

    pub async fn revoke_permission(&self, slug: &str, permission_uid: Uuid) -> Result<(), AppError> {
        let community = self.get(slug).await?;

        PermissionService::new(self.db)
            .revoke_scoped(&permission_prefix(&community.slug), permission_uid)
            .await
    }

    async fn hydrate(
        &self,
        application: entity::community_application::Model,
    ) -> Result<CommunityApplication, AppError> {
        CommunityApplicationRepository::new(self.db)
            .hydrate(application)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }
}

fn permission_prefix(slug: &str) -> String {
    format!("community.{}.", slug.to_lowercase())
}

fn not_found(slug: &str) -> AppError {
    AppError::NotFound(format!("Community '{}' not found", slug))
}
