//! Notification handlers. Every endpoint is scoped to the authenticated caller;
//! other users' notifications behave as if they did not exist.

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
        notification::{
            MarkedReadDto, NotificationListDto, NotificationResponseDto, UnreadCountDto,
        },
    },
    server::{
        controller::PageQuery,
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        model::notification::Notification,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

const DEFAULT_LIMIT: u64 = 25;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct NotificationQuery {
    /// Only unread notifications
    #[serde(default)]
    pub unread_only: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    tag = NOTIFICATION_TAG,
    params(PageQuery, NotificationQuery),
    responses(
        (status = 200, description = "Notifications, newest first", body = NotificationListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    token: AuthToken,
    Query(page): Query<PageQuery>,
    Query(query): Query<NotificationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let notifications = NotificationService::new(&state.db)
        .list(current.uid(), query.unread_only, page.page(DEFAULT_LIMIT))
        .await?;
    let (notifications, pagination) = notifications.into_parts(Notification::into_dto);

    Ok(Json(NotificationListDto {
        notifications,
        pagination,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/unread",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of unread notifications", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let unread = NotificationService::new(&state.db)
        .unread_count(current.uid())
        .await?;

    Ok(Json(UnreadCountDto { unread }))
}

#[utoipa::path(
    patch,
    path = "/api/v1/notifications/read",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = MarkedReadDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(current.uid())
        .await?;

    Ok(Json(MarkedReadDto { updated }))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/{uid}",
    tag = NOTIFICATION_TAG,
    params(("uid" = Uuid, Path, description = "Notification UID")),
    responses(
        (status = 200, description = "Notification", body = NotificationResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notification(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let notification = NotificationService::new(&state.db)
        .get(uid, current.uid())
        .await?;

    Ok(Json(NotificationResponseDto {
        notification: notification.into_dto(),
    }))
}

#[utoipa::path(
    patch,
    path = "/api/v1/notifications/{uid}/read",
    tag = NOTIFICATION_TAG,
    params(("uid" = Uuid, Path, description = "Notification UID")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(uid, current.uid())
        .await?;

    Ok(Json(NotificationResponseDto {
        notification: notification.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{uid}",
    tag = NOTIFICATION_TAG,
    params(("uid" = Uuid, Path, description = "Notification UID")),
    responses(
        (status = 200, description = "Notification deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    NotificationService::new(&state.db)
        .delete(uid, current.uid())
        .await?;

    Ok(Json(SuccessDto::ok()))
}
