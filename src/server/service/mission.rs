//! Mission service for listing, visibility checks and mission administration.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::mission::CreateMissionDto,
    server::{
        data::{
            community::CommunityRepository,
            mission::{visibility_condition, MissionRepository},
            mission_access::MissionAccessRepository,
            permission::PermissionRepository,
            registration::RegistrationRepository,
            slot::SlotRepository,
            slot_group::SlotGroupRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            mission::{
                CreateMissionParams, Mission, MissionAccess, MissionListItem, MissionListParams,
                MissionViewer, SlotCounts, UpdateMissionParams,
            },
            page::Paginated,
            permission::GrantedPermission,
        },
        service::permission::PermissionService,
        util::{dlc::validate_dlcs, permission::is_valid_mission_permission, slug::{is_valid_slug, slugify}},
    },
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the missions `viewer` may see with slot statistics.
    ///
    /// # Arguments
    /// - `params` - Paging, filters and optional calendar window
    /// - `viewer` - Caller context for visibility and the assigned/registered flags
    ///
    /// # Returns
    /// - `Ok(Paginated<MissionListItem>)` - Missions ordered by start time, newest first
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        params: MissionListParams,
        viewer: &MissionViewer,
    ) -> Result<Paginated<MissionListItem>, AppError> {
        let accessible = match viewer.user_uid {
            Some(user_uid) if !viewer.is_admin => {
                MissionAccessRepository::new(self.db)
                    .get_mission_uids_for(user_uid, viewer.community_uid)
                    .await?
            }
            _ => Vec::new(),
        };

        let page = MissionRepository::new(self.db)
            .get_paginated(&params, visibility_condition(viewer, accessible))
            .await?;

        let Paginated {
            items,
            total,
            limit,
            offset,
        } = page;
        let items = self.list_items(items, viewer.user_uid).await?;

        Ok(Paginated {
            items,
            total,
            limit,
            offset,
        })
    }

    /// Attaches slot counts and the viewer's involvement to each mission.
    async fn list_items(
        &self,
        missions: Vec<Mission>,
        user_uid: Option<Uuid>,
    ) -> Result<Vec<MissionListItem>, AppError> {
        if missions.is_empty() {
            return Ok(Vec::new());
        }

        let groups = SlotGroupRepository::new(self.db)
            .get_by_missions(missions.iter().map(|m| m.uid).collect())
            .await?;
        let group_missions: HashMap<Uuid, Uuid> =
            groups.iter().map(|g| (g.uid, g.mission_uid)).collect();

        let slots = SlotRepository::new(self.db)
            .get_by_groups(groups.iter().map(|g| g.uid).collect())
            .await?;

        let registered = match user_uid {
            Some(user_uid) => {
                RegistrationRepository::new(self.db)
                    .slot_uids_for_user(user_uid, slots.iter().map(|s| s.uid).collect())
                    .await?
            }
            None => Default::default(),
        };

        let mut slots_by_mission: HashMap<Uuid, Vec<&entity::mission_slot::Model>> =
            HashMap::new();
        for slot in &slots {
            if let Some(mission_uid) = group_missions.get(&slot.slot_group_uid) {
                slots_by_mission.entry(*mission_uid).or_default().push(slot);
            }
        }

        Ok(missions
            .into_iter()
            .map(|mission| {
                let slots = slots_by_mission.remove(&mission.uid).unwrap_or_default();

                MissionListItem {
                    slot_counts: SlotCounts::tally(slots.iter().copied()),
                    is_assigned_to_any_slot: user_uid.is_some()
                        && slots.iter().any(|s| s.assignee_uid == user_uid),
                    is_registered_for_any_slot: slots.iter().any(|s| registered.contains(&s.uid)),
                    mission,
                }
            })
            .collect())
    }

    pub async fn slug_available(&self, slug: &str) -> Result<bool, AppError> {
        Ok(!MissionRepository::new(self.db).slug_exists(slug).await?)
    }

    /// Fetches a mission the viewer is allowed to see.
    ///
    /// Missions hidden from the viewer are reported as missing.
    pub async fn get(&self, slug: &str, viewer: &MissionViewer) -> Result<Mission, AppError> {
        let Some(mission) = MissionRepository::new(self.db).find_by_slug(slug).await? else {
            return Err(not_found(slug));
        };

        if !self.can_view(&mission, viewer).await? {
            return Err(not_found(slug));
        }

        Ok(mission)
    }

    /// Visibility check for a single mission, access grants included.
    pub async fn can_view(&self, mission: &Mission, viewer: &MissionViewer) -> Result<bool, AppError> {
        let has_access = match viewer.user_uid {
            Some(user_uid) => {
                MissionAccessRepository::new(self.db)
                    .has_access(mission.uid, user_uid, viewer.community_uid)
                    .await?
            }
            None => false,
        };

        Ok(viewer.can_view(mission, has_access))
    }

    /// Bare mission row, used by controllers to resolve the creator for permission checks.
    pub async fn find_model(&self, slug: &str) -> Result<entity::mission::Model, AppError> {
        MissionRepository::new(self.db)
            .find_model_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Creates a mission and grants its creator `mission.{slug}.creator`.
    ///
    /// # Arguments
    /// - `creator_uid` - Authenticated caller creating the mission
    /// - `dto` - Request body; the slug falls back to the slugified title
    ///
    /// # Returns
    /// - `Ok(Mission)` - The created mission
    /// - `Err(AppError::BadRequest)` - Empty or malformed slug, invalid DLCs or unknown community
    /// - `Err(AppError::Conflict)` - Slug already taken
    pub async fn create(
        &self,
        creator_uid: Uuid,
        dto: CreateMissionDto,
    ) -> Result<Mission, AppError> {
        let slug = match dto.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => slug.to_lowercase(),
            None => slugify(&dto.title),
        };
        if slug.is_empty() {
            return Err(AppError::BadRequest(
                "Mission slug must not be empty".to_string(),
            ));
        }
        if !is_valid_slug(&slug) {
            return Err(AppError::BadRequest(format!(
                "Mission slug '{}' may only contain lowercase letters, digits, '-' and '_'",
                slug
            )));
        }

        if let Some(dlcs) = &dto.required_dlcs {
            validate_dlcs(dlcs)?;
        }
        if let Some(community_uid) = dto.community_uid {
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

        let taken = || AppError::Conflict(format!("Mission slug '{}' is already taken", slug));
        if MissionRepository::new(self.db).slug_exists(&slug).await? {
            return Err(taken());
        }

        let params = CreateMissionParams::from_dto(dto, slug.clone(), creator_uid);

        let txn = self.db.begin().await?;
        let mission = MissionRepository::new(&txn)
            .create(None, params)
            .await
            .map_err(|e| AppError::on_unique_violation(e, taken))?;
        PermissionRepository::new(&txn)
            .get_or_create(creator_uid, &format!("mission.{}.creator", slug))
            .await?;
        txn.commit().await?;

        tracing::info!("User {} created mission {}", creator_uid, mission.slug);

        Ok(mission)
    }

    pub async fn update(
        &self,
        mission_uid: Uuid,
        params: UpdateMissionParams,
    ) -> Result<Mission, AppError> {
        if let Some(dlcs) = &params.required_dlcs {
            validate_dlcs(dlcs)?;
        }

        MissionRepository::new(self.db)
            .update(mission_uid, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))
    }

    /// Deletes a mission and every `mission.{slug}.*` permission.
    pub async fn delete(&self, mission: &entity::mission::Model) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        MissionRepository::new(&txn).delete(mission.uid).await?;
        let removed = PermissionRepository::new(&txn)
            .delete_by_prefix(&permission_prefix(&mission.slug))
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Deleted mission {} and {} permission(s)",
            mission.slug,
            removed
        );

        Ok(())
    }

    pub async fn list_permissions(&self, slug: &str) -> Result<Vec<GrantedPermission>, AppError> {
        PermissionService::new(self.db)
            .list_scoped(&permission_prefix(slug))
            .await
    }

    /// Grants a mission permission; only `editor` and `slotlist.community` are grantable.
    pub async fn grant_permission(
        &self,
        slug: &str,
        user_uid: Uuid,
        permission: &str,
    ) -> Result<GrantedPermission, AppError> {
        if !is_valid_mission_permission(slug, permission) {
            return Err(AppError::BadRequest(format!(
                "Invalid mission permission '{}'",
                permission
            )));
        }

        PermissionService::new(self.db)
            .grant_scoped(user_uid, permission)
            .await
    }

    pub async fn revoke_permission(&self, slug: &str, permission_uid: Uuid) -> Result<(), AppError> {
        PermissionService::new(self.db)
            .revoke_scoped(&permission_prefix(slug), permission_uid)
            .await
    }

    pub async fn list_accesses(&self, mission_uid: Uuid) -> Result<Vec<MissionAccess>, AppError> {
        Ok(MissionAccessRepository::new(self.db)
            .get_by_mission(mission_uid)
            .await?)
    }

    /// Grants a user or a community access to the mission.
    ///
    /// # Returns
    /// - `Ok(MissionAccess)` - The created grant
    /// - `Err(AppError::BadRequest)` - Not exactly one grantee given
    /// - `Err(AppError::NotFound)` - Grantee does not exist
    pub async fn grant_access(
        &self,
        mission_uid: Uuid,
        user_uid: Option<Uuid>,
        community_uid: Option<Uuid>,
    ) -> Result<MissionAccess, AppError> {
        match (user_uid, community_uid) {
            (Some(user_uid), None) => {
                if !UserRepository::new(self.db).exists(user_uid).await? {
                    return Err(AppError::NotFound("User not found".to_string()));
                }
            }
            (None, Some(community_uid)) => {
                if CommunityRepository::new(self.db)
                    .find_by_uid(community_uid)
                    .await?
                    .is_none()
                {
                    return Err(AppError::NotFound("Community not found".to_string()));
                }
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Exactly one of userUid and communityUid must be given".to_string(),
                ))
            }
        }

        Ok(MissionAccessRepository::new(self.db)
            .create(mission_uid, user_uid, community_uid)
            .await?)
    }

    pub async fn revoke_access(&self, mission_uid: Uuid, access_uid: Uuid) -> Result<(), AppError> {
        let access_repo = MissionAccessRepository::new(self.db);

        match access_repo.find_by_uid(access_uid).await? {
            Some(access) if access.mission_uid == mission_uid => {
                access_repo.delete(access_uid).await?;
                Ok(())
            }
            _ => Err(AppError::NotFound("Mission access not found".to_string())),
        }
    }
}

fn permission_prefix(slug: &str) -> String {
    format!("mission.{}.", slug.to_lowercase())
}

fn not_found(slug: &str) -> AppError {
    AppError::NotFound(format!("Mission '{}' not found", slug))
}
