//! One-time import of missions from the legacy slotlist API.
//!
//! Communities, users, slot groups, slots and registrations keep their legacy uids so
//! repeated references within one payload resolve to the same rows. Users created here
//! carry a placeholder Steam ID (`imported_<uid>`) until they are merged with the real
//! account, see [`crate::server::service::merge`].

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::{import::ImportPreviewDto, mission::MissionVisibility},
    server::{
        data::{
            community::CommunityRepository, mission::MissionRepository,
            registration::RegistrationRepository, slot::SlotRepository,
            slot_group::SlotGroupRepository, user::UserRepository,
        },
        error::{import::ImportError, AppError},
        model::{
            community::{Community, CreateCommunityParams},
            import::{
                LegacyCommunity, LegacyMissionResponse, LegacyPayload, LegacySlotsResponse,
                LegacyUser,
            },
            mission::{CreateMissionParams, Mission},
            slot::NewSlot,
            user::{CreateUserParams, User, IMPORTED_STEAM_ID_PREFIX},
        },
        util::slug::is_valid_slug,
    },
};

/// Result of an import request.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Dry run; nothing was written.
    Preview(ImportPreviewDto),
    Imported(Mission),
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    legacy_api_url: &'a str,
}

impl<'a> ImportService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        legacy_api_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            legacy_api_url,
        }
    }

    /// Fetches a mission from the legacy API and imports or previews it.
    ///
    /// # Arguments
    /// - `slug` - Legacy mission slug
    /// - `creator_uid` - Local user to own the mission, defaults to the legacy creator
    /// - `dry_run` - Only return a preview
    ///
    /// # Returns
    /// - `Ok(ImportOutcome)` - Preview or the imported mission
    /// - `Err(ImportError::ApiFetch)` - Legacy API unreachable or returned an unusable body
    /// - `Err(ImportError::MissionAlreadyExists)` - Slug already used locally
    /// - `Err(ImportError::CreatorNotFound)` - Requested creator does not exist
    pub async fn import(
        &self,
        slug: &str,
        creator_uid: Option<Uuid>,
        dry_run: bool,
    ) -> Result<ImportOutcome, AppError> {
        let payload = self.fetch(slug).await?;

        if dry_run {
            return Ok(ImportOutcome::Preview(payload.preview()));
        }

        self.import_payload(payload, creator_uid)
            .await
            .map(ImportOutcome::Imported)
    }

    /// Fetches the mission and its slotlist.
    pub async fn fetch(&self, slug: &str) -> Result<LegacyPayload, AppError> {
        let base = self.legacy_api_url.trim_end_matches('/');

        let mission: LegacyMissionResponse = self
            .get_json(&format!("{}/v1/missions/{}", base, slug))
            .await?;
        let slots: LegacySlotsResponse = self
            .get_json(&format!("{}/v1/missions/{}/slots", base, slug))
            .await?;

        Ok(LegacyPayload {
            mission: mission.mission,
            slot_groups: slots.slot_groups,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ImportError::ApiFetch(e.to_string()))?;

        Ok(response
            .json::<T>()
            .await
            .map_err(|e| ImportError::ApiFetch(e.to_string()))?)
    }

    /// Writes an already fetched payload in a single transaction.
    pub async fn import_payload(
        &self,
        payload: LegacyPayload,
        creator_uid: Option<Uuid>,
    ) -> Result<Mission, AppError> {
        if let Some(creator_uid) = creator_uid {
            if !UserRepository::new(self.db).exists(creator_uid).await? {
                return Err(ImportError::CreatorNotFound(creator_uid).into());
            }
        } else if payload.mission.creator.is_none() {
            return Err(ImportError::MissingCreator.into());
        }

        let slug = payload.mission.slug.to_lowercase();
        if !is_valid_slug(&slug) {
            return Err(ImportError::InvalidSlug(slug).into());
        }
        if MissionRepository::new(self.db).slug_exists(&slug).await? {
            return Err(ImportError::MissionAlreadyExists(slug).into());
        }

        let txn = self.db.begin().await?;

        let creator_uid = match (creator_uid, &payload.mission.creator) {
            (Some(uid), _) => uid,
            (None, Some(creator)) => get_or_create_user(&txn, creator).await?.uid,
            (None, None) => return Err(ImportError::MissingCreator.into()),
        };
        let community_uid = match &payload.mission.community {
            Some(community) => Some(get_or_create_community(&txn, community).await?.uid),
            None => None,
        };

        let legacy = payload.mission;
        let now = Utc::now();
        let mission = MissionRepository::new(&txn)
            .create(
                None,
                CreateMissionParams {
                    slug,
                    title: legacy.title,
                    short_description: legacy.description,
                    detailed_description: legacy.detailed_description,
                    collapsed_description: legacy.collapsed_description,
                    briefing_time: legacy.briefing_time.unwrap_or(now),
                    slotting_time: legacy.slotting_time.unwrap_or(now),
                    start_time: legacy.start_time.unwrap_or(now),
                    end_time: legacy.end_time.unwrap_or(now),
                    visibility: MissionVisibility::from_db(&legacy.visibility),
                    tech_support: legacy.tech_support,
                    rules: legacy.rules,
                    details_map: None,
                    details_game_mode: None,
                    required_dlcs: legacy.required_dlcs,
                    banner_image_url: legacy.banner_image_url,
                    game_server: legacy.game_server,
                    voice_comms: legacy.voice_comms,
                    repositories: legacy.repositories,
                    creator_uid,
                    community_uid,
                },
            )
            .await?;

        let group_repo = SlotGroupRepository::new(&txn);
        let slot_repo = SlotRepository::new(&txn);
        let registration_repo = RegistrationRepository::new(&txn);
        let mut slot_count = 0;

        for group in payload.slot_groups {
            group_repo
                .create(
                    Some(group.uid),
                    mission.uid,
                    group.title,
                    group.description,
                    group.order_number,
                )
                .await?;

            for slot in group.slots {
                let restricted_community_uid = match &slot.restricted_community {
                    Some(community) => Some(get_or_create_community(&txn, community).await?.uid),
                    None => None,
                };
                let assignee_uid = match &slot.assignee {
                    Some(assignee) => Some(get_or_create_user(&txn, assignee).await?.uid),
                    None => None,
                };

                slot_repo
                    .create(NewSlot {
                        uid: Some(slot.uid),
                        slot_group_uid: group.uid,
                        title: slot.title,
                        description: slot.description,
                        detailed_description: slot.detailed_description,
                        order_number: slot.order_number,
                        required_dlcs: slot.required_dlcs,
                        external_assignee: slot.external_assignee,
                        assignee_uid,
                        restricted_community_uid,
                        blocked: slot.blocked,
                        reserve: slot.reserve,
                        auto_assignable: slot.auto_assignable,
                    })
                    .await?;

                if let (Some(assignee_uid), Some(registration_uid)) =
                    (assignee_uid, slot.registration_uid)
                {
                    registration_repo
                        .create(Some(registration_uid), assignee_uid, slot.uid, None)
                        .await?;
                }
                slot_count += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Imported mission {} with {} slot(s)",
            mission.slug,
            slot_count
        );

        Ok(mission)
    }
}

/// Finds a community by legacy uid, then by slug, creating it when neither matches.
async fn get_or_create_community<C: ConnectionTrait>(
    db: &C,
    legacy: &LegacyCommunity,
) -> Result<Community, AppError> {
    let repo = CommunityRepository::new(db);

    if let Some(community) = repo.find_by_uid(legacy.uid).await? {
        return Ok(community);
    }
    if let Some(community) = repo.find_by_slug(&legacy.slug).await? {
        return Ok(community);
    }

    let community = repo
        .create(
            Some(legacy.uid),
            CreateCommunityParams {
                name: legacy.name.clone(),
                tag: legacy.tag.clone(),
                slug: legacy.slug.to_lowercase(),
                website: legacy.website.clone(),
                logo_url: legacy.logo_url.clone(),
                game_servers: Vec::new(),
                voice_comms: Vec::new(),
                repositories: Vec::new(),
            },
        )
        .await?;

    Ok(community)
}

/// Finds a user by legacy uid or creates a placeholder account.
///
/// An existing user is moved to the legacy community when it differs.
async fn get_or_create_user<C: ConnectionTrait>(
    db: &C,
    legacy: &LegacyUser,
) -> Result<User, AppError> {
    let community_uid = match &legacy.community {
        Some(community) => Some(get_or_create_community(db, community).await?.uid),
        None => None,
    };

    let repo = UserRepository::new(db);
    if let Some(user) = repo.find_by_uid(legacy.uid).await? {
        if community_uid.is_some() && user.community_uid() != community_uid {
            repo.set_community(user.uid, community_uid).await?;
        }
        return Ok(user);
    }

    let user = repo
        .create(CreateUserParams {
            uid: Some(legacy.uid),
            nickname: legacy.nickname.clone(),
            steam_id: format!("{}{}", IMPORTED_STEAM_ID_PREFIX, legacy.uid),
            community_uid,
        })
        .await?;

    Ok(user)
}
