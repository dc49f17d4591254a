use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        permission::{CreatePermissionDto, PermissionDto},
        user::{UpdateUserDto, UserListDto, UserMissionsDto, UserResponseDto},
    },
    server::{
        controller::{PageQuery, SearchQuery},
        error::AppError,
        middleware::auth::{
            viewer_of, AuthGuard, AuthToken, Permission, ADMIN_PERMISSION, ADMIN_USER,
        },
        service::{permission::PermissionService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

const DEFAULT_LIMIT: u64 = 25;
const DEFAULT_MISSION_LIMIT: u64 = 10;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UserMissionsQuery {
    /// Include missions whose end time has passed
    #[serde(default = "include_ended_default")]
    pub include_ended: bool,
}

fn include_ended_default() -> bool {
    true
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(PageQuery, SearchQuery),
    responses(
        (status = 200, description = "Users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .list(search.search.as_deref(), page.page(DEFAULT_LIMIT))
        .await?;
    let (users, pagination) = users.into_parts(|u| u.into_dto(false));

    Ok(Json(UserListDto { users, pagination }))
}

/// Get a user profile.
///
/// `steamId` and `active` are only included for callers holding `admin.user`.
#[utoipa::path(
    get,
    path = "/api/v1/users/{uid}",
    tag = USER_TAG,
    params(("uid" = Uuid, Path, description = "User UID")),
    responses(
        (status = 200, description = "User", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).optional().await?;
    let include_private = current
        .as_ref()
        .is_some_and(|c| c.has_permission(&[ADMIN_USER]));

    let user = UserService::new(&state.db).get(uid).await?;

    Ok(Json(UserResponseDto {
        user: user.into_dto(include_private),
    }))
}

/// Update a user profile.
///
/// # Access Control
/// - The user themselves, or `admin.user`
/// - Changing `active` always requires `admin.user`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Empty nickname
/// - `403 Forbidden` - Not allowed to edit this user or its active flag
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    patch,
    path = "/api/v1/users/{uid}",
    tag = USER_TAG,
    params(("uid" = Uuid, Path, description = "User UID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponseDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token)
        .require(&[Permission::SelfOr(uid, ADMIN_USER.to_string())])
        .await?;
    let is_admin = current.has_permission(&[ADMIN_USER]);

    let user = UserService::new(&state.db)
        .update(uid, payload.into(), is_admin)
        .await?;

    Ok(Json(UserResponseDto {
        user: user.into_dto(is_admin),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{uid}",
    tag = USER_TAG,
    params(("uid" = Uuid, Path, description = "User UID")),
    responses(
        (status = 200, description = "User deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin.user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Any(vec![ADMIN_USER.to_string()])])
        .await?;

    UserService::new(&state.db).delete(uid).await?;

    Ok(Json(SuccessDto::ok()))
}

/// Missions created by the user that the caller may see.
#[utoipa::path(
    get,
    path = "/api/v1/users/{uid}/missions",
    tag = USER_TAG,
    params(("uid" = Uuid, Path, description = "User UID"), PageQuery, UserMissionsQuery),
    responses(
        (status = 200, description = "Missions of the user", body = UserMissionsDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_missions(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
    Query(page): Query<PageQuery>,
    Query(query): Query<UserMissionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).optional().await?;

    let missions = UserService::new(&state.db)
        .missions(
            uid,
            &viewer_of(current.as_ref()),
            page.page(DEFAULT_MISSION_LIMIT),
            query.include_ended,
        )
        .await?;
    let (missions, pagination) = missions.into_parts(|m| m.into_dto());

    Ok(Json(UserMissionsDto {
        missions,
        pagination,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{uid}/permissions",
    tag = USER_TAG,
    params(("uid" = Uuid, Path, description = "User UID")),
    responses(
        (status = 200, description = "Permissions of the user", body = Vec<PermissionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin.permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_permissions(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Any(vec![ADMIN_PERMISSION.to_string()])])
        .await?;

    let permissions = PermissionService::new(&state.db)
        .user_permissions(uid)
        .await?;

    Ok(Json(
        permissions
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<PermissionDto>>(),
    ))
}

/// Grant a permission string to a user.
///
/// Granting a permission the user already holds returns the existing entry.
#[utoipa::path(
    post,
    path = "/api/v1/users/{uid}/permissions",
    tag = USER_TAG,
    params(("uid" = Uuid, Path, description = "User UID")),
    request_body = CreatePermissionDto,
    responses(
        (status = 200, description = "Permission granted", body = PermissionDto),
        (status = 400, description = "Empty permission", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin.permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user_permission(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
    Json(payload): Json<CreatePermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Any(vec![ADMIN_PERMISSION.to_string()])])
        .await?;

    let permission = PermissionService::new(&state.db)
        .grant(uid, &payload.permission)
        .await?;

    Ok(Json(permission.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{uid}/permissions/{permission_uid}",
    tag = USER_TAG,
    params(
        ("uid" = Uuid, Path, description = "User UID"),
        ("permission_uid" = Uuid, Path, description = "Permission UID")
    ),
    responses(
        (status = 200, description = "Permission revoked", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin.permission", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user_permission(
    State(state): State<AppState>,
    token: AuthToken,
    Path((uid, permission_uid)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Any(vec![ADMIN_PERMISSION.to_string()])])
        .await?;

    PermissionService::new(&state.db)
        .revoke(uid, permission_uid)
        .await?;

    Ok(Json(SuccessDto::ok()))
}
