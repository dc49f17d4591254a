use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SlugAvailableDto, SuccessDto},
        mission::{
            CreateMissionAccessDto, CreateMissionDto, MissionAccessListDto,
            MissionAccessResponseDto, MissionCreatedDto, MissionListDto, MissionListItemDto,
            MissionResponseDto, UpdateMissionDto,
        },
        permission::{GrantPermissionDto, GrantedPermissionListDto, GrantedPermissionResponseDto},
    },
    server::{
        controller::{PageQuery, SlugQuery},
        error::AppError,
        middleware::auth::{viewer_of, AuthGuard, AuthToken, CurrentUser, Permission},
        model::mission::{MissionListItem, MissionListParams},
        service::{auth::AuthService, mission::MissionService},
        state::AppState,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

const DEFAULT_LIMIT: u64 = 25;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct MissionListQuery {
    /// Include missions whose end time has passed
    #[serde(default)]
    pub include_ended: bool,
    /// Calendar window start, epoch milliseconds
    pub start_date: Option<i64>,
    /// Calendar window end, epoch milliseconds
    pub end_date: Option<i64>,
}

impl MissionListQuery {
    /// Resolves `startDate`/`endDate` into a window when both are present.
    pub fn window(&self) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>, AppError> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Ok(None);
        };

        let parse = |ms: i64| {
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid timestamp {}", ms)))
        };

        Ok(Some((parse(start)?, parse(end)?)))
    }
}

/// Resolves the mission and requires the caller to be one of its editors.
///
/// Shared by every handler that modifies a mission or its slotlist.
pub(super) async fn require_editor(
    state: &AppState,
    token: &AuthToken,
    slug: &str,
) -> Result<(entity::mission::Model, CurrentUser), AppError> {
    let mission = MissionService::new(&state.db).find_model(slug).await?;
    let current = AuthGuard::new(&state.db, token)
        .require(&[Permission::MissionEditor {
            slug: mission.slug.clone(),
            creator_uid: mission.creator_uid,
        }])
        .await?;

    Ok((mission, current))
}

/// List missions visible to the caller.
///
/// When both `startDate` and `endDate` are given the response is the bare array of
/// missions starting inside that window, for calendar views.
///
/// # Returns
/// - `200 OK` - `{missions, total}`, or a bare array for calendar queries
/// - `400 Bad Request` - Unparseable timestamps
#[utoipa::path(
    get,
    path = "/api/v1/missions",
    tag = MISSION_TAG,
    params(PageQuery, MissionListQuery),
    responses(
        (status = 200, description = "Missions", body = MissionListDto),
        (status = 400, description = "Invalid calendar window", body = ErrorDto)
    ),
)]
pub async fn get_missions(
    State(state): State<AppState>,
    token: AuthToken,
    Query(page): Query<PageQuery>,
    Query(query): Query<MissionListQuery>,
) -> Result<Response, AppError> {
    let current = AuthGuard::new(&state.db, &token).optional().await?;
    let window = query.window()?;

    let page = page.page(DEFAULT_LIMIT);
    let mut params = MissionListParams::new(page.limit, page.offset);
    params.include_ended = query.include_ended || window.is_some();
    params.window = window;

    let missions = MissionService::new(&state.db)
        .list(params, &viewer_of(current.as_ref()))
        .await?;

    if window.is_some() {
        let missions: Vec<MissionListItemDto> = missions
            .items
            .into_iter()
            .map(MissionListItem::into_dto)
            .collect();
        return Ok(Json(missions).into_response());
    }

    let total = missions.total;
    Ok(Json(MissionListDto {
        missions: missions
            .items
            .into_iter()
            .map(MissionListItem::into_dto)
            .collect(),
        total,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/missions/slugAvailable",
    tag = MISSION_TAG,
    params(SlugQuery),
    responses(
        (status = 200, description = "Whether the slug is free", body = SlugAvailableDto)
    ),
)]
pub async fn get_slug_available(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
) -> Result<impl IntoResponse, AppError> {
    let available = MissionService::new(&state.db)
        .slug_available(&query.slug)
        .await?;

    Ok(Json(SlugAvailableDto { available }))
}

/// Create a mission.
///
/// The caller becomes the mission creator and receives `mission.{slug}.creator`;
/// the returned token already carries it.
///
/// # Returns
/// - `201 Created` - Mission and refreshed token
/// - `400 Bad Request` - Empty slug, invalid DLCs or unknown community
/// - `409 Conflict` - Slug already taken
#[utoipa::path(
    post,
    path = "/api/v1/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Mission created", body = MissionCreatedDto),
        (status = 400, description = "Invalid mission data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<CreateMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let mission = MissionService::new(&state.db)
        .create(current.uid(), payload)
        .await?;
    let (token, _) = AuthService::new(&state.db, &state.jwt)
        .refresh(current.uid())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MissionCreatedDto {
            token,
            mission: mission.into_dto(),
        }),
    ))
}

/// Get a mission.
///
/// Missions the caller may not see are reported as `404`.
#[utoipa::path(
    get,
    path = "/api/v1/missions/{slug}",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    responses(
        (status = 200, description = "Mission", body = MissionResponseDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).optional().await?;

    let mission = MissionService::new(&state.db)
        .get(&slug, &viewer_of(current.as_ref()))
        .await?;

    Ok(Json(MissionResponseDto {
        mission: mission.into_dto(),
    }))
}

#[utoipa::path(
    patch,
    path = "/api/v1/missions/{slug}",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    request_body = UpdateMissionDto,
    responses(
        (status = 200, description = "Mission updated", body = MissionResponseDto),
        (status = 400, description = "Invalid mission data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_mission(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let mission = MissionService::new(&state.db)
        .update(mission.uid, payload.into())
        .await?;

    Ok(Json(MissionResponseDto {
        mission: mission.into_dto(),
    }))
}

/// Delete a mission with its slotlist and every `mission.{slug}.*` permission.
#[utoipa::path(
    delete,
    path = "/api/v1/missions/{slug}",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    responses(
        (status = 200, description = "Mission deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_mission(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    MissionService::new(&state.db).delete(&mission).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    get,
    path = "/api/v1/missions/{slug}/permissions",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    responses(
        (status = 200, description = "Mission permissions", body = GrantedPermissionListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_permissions(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let permissions = MissionService::new(&state.db)
        .list_permissions(&mission.slug)
        .await?;

    Ok(Json(GrantedPermissionListDto {
        permissions: permissions.into_iter().map(|p| p.into_dto()).collect(),
    }))
}

/// Grant `mission.{slug}.editor` or `mission.{slug}.slotlist.community`.
///
/// # Returns
/// - `200 OK` - Granted permission
/// - `400 Bad Request` - Permission not grantable on this mission
/// - `404 Not Found` - Unknown mission or user
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/permissions",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    request_body = GrantPermissionDto,
    responses(
        (status = 200, description = "Permission granted", body = GrantedPermissionResponseDto),
        (status = 400, description = "Permission not grantable here", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or user not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_permission(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<GrantPermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let permission = MissionService::new(&state.db)
        .grant_permission(&mission.slug, payload.user_uid, &payload.permission)
        .await?;

    Ok(Json(GrantedPermissionResponseDto {
        permission: permission.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/missions/{slug}/permissions/{uid}",
    tag = MISSION_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Permission UID")
    ),
    responses(
        (status = 200, description = "Permission revoked", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    MissionService::new(&state.db)
        .revoke_permission(&mission.slug, uid)
        .await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    get,
    path = "/api/v1/missions/{slug}/accesses",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    responses(
        (status = 200, description = "Access grants", body = MissionAccessListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_accesses(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let accesses = MissionService::new(&state.db)
        .list_accesses(mission.uid)
        .await?;

    Ok(Json(MissionAccessListDto {
        accesses: accesses.into_iter().map(|a| a.into_dto()).collect(),
    }))
}

/// Grant a user or a community access to a private mission.
///
/// # Returns
/// - `200 OK` - Created grant
/// - `400 Bad Request` - Not exactly one of `userUid` and `communityUid`
/// - `404 Not Found` - Unknown mission, user or community
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/accesses",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    request_body = CreateMissionAccessDto,
    responses(
        (status = 200, description = "Access granted", body = MissionAccessResponseDto),
        (status = 400, description = "Invalid grantee", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or grantee not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_access(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<CreateMissionAccessDto>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let access = MissionService::new(&state.db)
        .grant_access(mission.uid, payload.user_uid, payload.community_uid)
        .await?;

    Ok(Json(MissionAccessResponseDto {
        access: access.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/missions/{slug}/accesses/{uid}",
    tag = MISSION_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Access UID")
    ),
    responses(
        (status = 200, description = "Access revoked", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Access not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_access(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    MissionService::new(&state.db)
        .revoke_access(mission.uid, uid)
        .await?;

    Ok(Json(SuccessDto::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_requires_both_bounds() {
        let query = MissionListQuery {
            start_date: Some(1_700_000_000_000),
            ..Default::default()
        };
        assert!(query.window().unwrap().is_none());

        let query = MissionListQuery {
            start_date: Some(1_700_000_000_000),
            end_date: Some(1_700_086_400_000),
            ..Default::default()
        };
        let (start, end) = query.window().unwrap().unwrap();
        assert_eq!(start.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(end.timestamp_millis(), 1_700_086_400_000);
    }

    #[test]
    fn window_rejects_out_of_range_timestamps() {
        let query = MissionListQuery {
            start_date: Some(i64::MAX),
            end_date: Some(i64::MAX),
            ..Default::default()
        };
        assert!(matches!(query.window(), Err(AppError::BadRequest(_))));
    }
}
