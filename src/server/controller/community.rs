use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SlugAvailableDto, SuccessDto},
        community::{
            ApplicationListDto, ApplicationResponseDto, ApplicationStatus,
            ApplicationSubmittedDto, CommunityCreatedDto, CommunityDeletedDto, CommunityListDto,
            CommunityMembersDto, CommunityMissionsDto, CommunityResponseDto, CreateApplicationDto,
            CreateCommunityDto, UpdateApplicationDto, UpdateCommunityDto,
        },
        permission::{GrantPermissionDto, GrantedPermissionListDto, GrantedPermissionResponseDto},
    },
    server::{
        controller::{PageQuery, SearchQuery, SlugQuery},
        error::AppError,
        middleware::auth::{viewer_of, AuthGuard, AuthToken, Permission},
        model::community::{Community, CommunityApplication, CreateCommunityParams},
        service::{auth::AuthService, community::CommunityService},
        state::AppState,
    },
};

/// Tag for grouping community endpoints in OpenAPI documentation
pub static COMMUNITY_TAG: &str = "community";

const DEFAULT_LIMIT: u64 = 25;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplicationStatusQuery {
    /// Only applications in this state
    pub status: Option<ApplicationStatus>,
}

/// List communities.
///
/// # Returns
/// - `200 OK` - One page of communities matching `search` on name, tag or slug
#[utoipa::path(
    get,
    path = "/api/v1/communities",
    tag = COMMUNITY_TAG,
    params(PageQuery, SearchQuery),
    responses(
        (status = 200, description = "Communities", body = CommunityListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_communities(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let communities = CommunityService::new(&state.db)
        .list(search.search.as_deref(), page.page(DEFAULT_LIMIT))
        .await?;
    let (communities, pagination) = communities.into_parts(Community::into_dto);

    Ok(Json(CommunityListDto {
        communities,
        pagination,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/communities/slugAvailable",
    tag = COMMUNITY_TAG,
    params(SlugQuery),
    responses(
        (status = 200, description = "Whether the slug is free", body = SlugAvailableDto)
    ),
)]
pub async fn get_slug_available(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
) -> Result<impl IntoResponse, AppError> {
    let available = CommunityService::new(&state.db)
        .slug_available(&query.slug)
        .await?;

    Ok(Json(SlugAvailableDto { available }))
}

/// Create a community.
///
/// The caller joins the new community and becomes its leader. The returned token
/// already carries the leader permission.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Community and refreshed token
/// - `400 Bad Request` - Slug resolves to an empty string
/// - `401 Unauthorized` - Not authenticated
/// - `409 Conflict` - Slug already taken
#[utoipa::path(
    post,
    path = "/api/v1/communities",
    tag = COMMUNITY_TAG,
    request_body = CreateCommunityDto,
    responses(
        (status = 201, description = "Community created", body = CommunityCreatedDto),
        (status = 400, description = "Invalid community data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_community(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<CreateCommunityDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let requested_slug = payload.slug.clone();
    let params = CreateCommunityParams::from_dto(payload, String::new());

    let community = CommunityService::new(&state.db)
        .create(&current.user, requested_slug.as_deref(), params)
        .await?;
    let (token, _) = AuthService::new(&state.db, &state.jwt)
        .refresh(current.uid())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommunityCreatedDto {
            community: community.into_dto(),
            token,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/communities/{slug}",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    responses(
        (status = 200, description = "Community", body = CommunityResponseDto),
        (status = 404, description = "Community not found", body = ErrorDto)
    ),
)]
pub async fn get_community(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let community = CommunityService::new(&state.db).get(&slug).await?;

    Ok(Json(CommunityResponseDto {
        community: community.into_dto(),
    }))
}

/// Update a community.
///
/// # Access Control
/// - `community.{slug}.leader` or `admin.community`
#[utoipa::path(
    patch,
    path = "/api/v1/communities/{slug}",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    request_body = UpdateCommunityDto,
    responses(
        (status = 200, description = "Community updated", body = CommunityResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of the community", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_community(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateCommunityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityLeader(slug.clone())])
        .await?;

    let community = CommunityService::new(&state.db)
        .update(&slug, payload.into())
        .await?;

    Ok(Json(CommunityResponseDto {
        community: community.into_dto(),
    }))
}

/// Delete a community together with every `community.{slug}.*` permission.
///
/// # Access Control
/// - `community.{slug}.leader` or `admin.community`
///
/// # Returns
/// - `200 OK` - Deleted; the token no longer carries community permissions
#[utoipa::path(
    delete,
    path = "/api/v1/communities/{slug}",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    responses(
        (status = 200, description = "Community deleted", body = CommunityDeletedDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of the community", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_community(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityLeader(slug.clone())])
        .await?;

    CommunityService::new(&state.db).delete(&slug).await?;
    let (token, _) = AuthService::new(&state.db, &state.jwt)
        .refresh(current.uid())
        .await?;

    Ok(Json(CommunityDeletedDto {
        success: true,
        token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/communities/{slug}/members",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug"), PageQuery),
    responses(
        (status = 200, description = "Community members", body = CommunityMembersDto),
        (status = 404, description = "Community not found", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let members = CommunityService::new(&state.db)
        .members(&slug, page.page(DEFAULT_LIMIT))
        .await?;
    let (members, pagination) = members.into_parts(|m| m.into_dto());

    Ok(Json(CommunityMembersDto {
        members,
        pagination,
    }))
}

/// Missions of the community visible to the caller.
#[utoipa::path(
    get,
    path = "/api/v1/communities/{slug}/missions",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug"), PageQuery),
    responses(
        (status = 200, description = "Community missions", body = CommunityMissionsDto),
        (status = 404, description = "Community not found", body = ErrorDto)
    ),
)]
pub async fn get_missions(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).optional().await?;

    let missions = CommunityService::new(&state.db)
        .missions(&slug, &viewer_of(current.as_ref()), page.page(DEFAULT_LIMIT))
        .await?;
    let (missions, pagination) = missions.into_parts(|m| m.into_dto());

    Ok(Json(CommunityMissionsDto {
        missions,
        pagination,
    }))
}

/// List applications to the community.
///
/// # Access Control
/// - `community.{slug}.leader`, `community.{slug}.recruitment` or `admin.community`
#[utoipa::path(
    get,
    path = "/api/v1/communities/{slug}/applications",
    tag = COMMUNITY_TAG,
    params(
        ("slug" = String, Path, description = "Community slug"),
        ApplicationStatusQuery,
        PageQuery
    ),
    responses(
        (status = 200, description = "Applications", body = ApplicationListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to process applications", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Query(status): Query<ApplicationStatusQuery>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityRecruitment(slug.clone())])
        .await?;

    let applications = CommunityService::new(&state.db)
        .applications(&slug, status.status, page.page(DEFAULT_LIMIT))
        .await?;
    let (applications, pagination) = applications.into_parts(CommunityApplication::into_dto);

    Ok(Json(ApplicationListDto {
        applications,
        pagination,
    }))
}

/// Apply to join the community.
///
/// # Returns
/// - `201 Created` - Application submitted
/// - `409 Conflict` - Already a member or already applied
#[utoipa::path(
    post,
    path = "/api/v1/communities/{slug}/applications",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationSubmittedDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 409, description = "Already a member or already applied", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_application(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    payload: Option<Json<CreateApplicationDto>>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;
    let Json(payload) = payload.unwrap_or_default();

    let application = CommunityService::new(&state.db)
        .apply(&slug, &current.user, payload.application_text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationSubmittedDto {
            status: application.status,
            application: application.into_dto(),
        }),
    ))
}

/// The caller's own application to the community.
#[utoipa::path(
    get,
    path = "/api/v1/communities/{slug}/applications/status",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    responses(
        (status = 200, description = "Own application", body = ApplicationResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No application", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_application_status(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let application = CommunityService::new(&state.db)
        .application_status(&slug, current.uid())
        .await?;

    Ok(Json(ApplicationResponseDto {
        application: application.into_dto(),
    }))
}

/// Approve or deny an application.
///
/// # Access Control
/// - `community.{slug}.leader`, `community.{slug}.recruitment` or `admin.community`
#[utoipa::path(
    patch,
    path = "/api/v1/communities/{slug}/applications/{uid}",
    tag = COMMUNITY_TAG,
    params(
        ("slug" = String, Path, description = "Community slug"),
        ("uid" = Uuid, Path, description = "Application UID")
    ),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Application processed", body = ApplicationResponseDto),
        (status = 400, description = "Status is not approved or denied", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to process applications", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_application(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
    Json(payload): Json<UpdateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityRecruitment(slug.clone())])
        .await?;

    let application = CommunityService::new(&state.db)
        .process_application(&slug, uid, payload.status)
        .await?;

    Ok(Json(ApplicationResponseDto {
        application: application.into_dto(),
    }))
}

/// Permissions scoped to the community.
///
/// # Access Control
/// - `community.{slug}.leader` or `admin.community`
#[utoipa::path(
    get,
    path = "/api/v1/communities/{slug}/permissions",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    responses(
        (status = 200, description = "Community permissions", body = GrantedPermissionListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of the community", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_permissions(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityLeader(slug.clone())])
        .await?;

    let permissions = CommunityService::new(&state.db)
        .list_permissions(&slug)
        .await?;

    Ok(Json(GrantedPermissionListDto {
        permissions: permissions.into_iter().map(|p| p.into_dto()).collect(),
    }))
}

/// Grant `community.{slug}.leader` or `community.{slug}.recruitment`.
///
/// # Access Control
/// - `community.{slug}.leader` or `admin.community`
#[utoipa::path(
    post,
    path = "/api/v1/communities/{slug}/permissions",
    tag = COMMUNITY_TAG,
    params(("slug" = String, Path, description = "Community slug")),
    request_body = GrantPermissionDto,
    responses(
        (status = 200, description = "Permission granted", body = GrantedPermissionResponseDto),
        (status = 400, description = "Permission not grantable here", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of the community", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_permission(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<GrantPermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityLeader(slug.clone())])
        .await?;

    let permission = CommunityService::new(&state.db)
        .grant_permission(&slug, payload.user_uid, &payload.permission)
        .await?;

    Ok(Json(GrantedPermissionResponseDto {
        permission: permission.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/communities/{slug}/permissions/{uid}",
    tag = COMMUNITY_TAG,
    params(
        ("slug" = String, Path, description = "Community slug"),
        ("uid" = Uuid, Path, description = "Permission UID")
    ),
    responses(
        (status = 200, description = "Permission revoked", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of the community", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::CommunityLeader(slug.clone())])
        .await?;

    CommunityService::new(&state.db)
        .revoke_permission(&slug, uid)
        .await?;

    Ok(Json(SuccessDto::ok()))
}
