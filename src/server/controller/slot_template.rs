use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        slot_template::{
            CreateSlotTemplateDto, SlotTemplateListDto, SlotTemplateResponseDto,
            UpdateSlotTemplateDto,
        },
    },
    server::{
        controller::PageQuery,
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken, ADMIN_SLOT_TEMPLATE},
        model::slot_template::{CreateSlotTemplateParams, SlotTemplate},
        service::slot_template::SlotTemplateService,
        state::AppState,
    },
};

/// Tag for grouping slot template endpoints in OpenAPI documentation
pub static SLOT_TEMPLATE_TAG: &str = "slot_template";

const DEFAULT_LIMIT: u64 = 25;

#[utoipa::path(
    get,
    path = "/api/v1/missionSlotTemplates",
    tag = SLOT_TEMPLATE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Slot templates", body = SlotTemplateListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_slot_templates(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let templates = SlotTemplateService::new(&state.db)
        .list(page.page(DEFAULT_LIMIT))
        .await?;

    Ok(Json(SlotTemplateListDto {
        total: templates.total,
        slot_templates: templates
            .items
            .into_iter()
            .map(SlotTemplate::into_dto)
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/missionSlotTemplates/{uid}",
    tag = SLOT_TEMPLATE_TAG,
    params(("uid" = Uuid, Path, description = "Slot template UID")),
    responses(
        (status = 200, description = "Slot template", body = SlotTemplateResponseDto),
        (status = 404, description = "Slot template not found", body = ErrorDto)
    ),
)]
pub async fn get_slot_template(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let template = SlotTemplateService::new(&state.db).get(uid).await?;

    Ok(Json(SlotTemplateResponseDto {
        slot_template: template.into_dto(),
    }))
}

/// Create a slot template owned by the caller.
///
/// Slot group entries that are not objects are dropped and every group gets a
/// `slots` array.
#[utoipa::path(
    post,
    path = "/api/v1/missionSlotTemplates",
    tag = SLOT_TEMPLATE_TAG,
    request_body = CreateSlotTemplateDto,
    responses(
        (status = 200, description = "Slot template created", body = SlotTemplateResponseDto),
        (status = 400, description = "Empty title or unknown community", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_slot_template(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<CreateSlotTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let template = SlotTemplateService::new(&state.db)
        .create(CreateSlotTemplateParams::from_dto(payload, current.uid()))
        .await?;

    Ok(Json(SlotTemplateResponseDto {
        slot_template: template.into_dto(),
    }))
}

/// Update a slot template.
///
/// # Access Control
/// - Template creator or `admin.slotTemplate`
#[utoipa::path(
    patch,
    path = "/api/v1/missionSlotTemplates/{uid}",
    tag = SLOT_TEMPLATE_TAG,
    params(("uid" = Uuid, Path, description = "Slot template UID")),
    request_body = UpdateSlotTemplateDto,
    responses(
        (status = 200, description = "Slot template updated", body = SlotTemplateResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Slot template not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_slot_template(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
    Json(payload): Json<UpdateSlotTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;
    let is_admin = current.has_permission(&[ADMIN_SLOT_TEMPLATE]);

    let template = SlotTemplateService::new(&state.db)
        .update(uid, current.uid(), is_admin, payload.into())
        .await?;

    Ok(Json(SlotTemplateResponseDto {
        slot_template: template.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/missionSlotTemplates/{uid}",
    tag = SLOT_TEMPLATE_TAG,
    params(("uid" = Uuid, Path, description = "Slot template UID")),
    responses(
        (status = 200, description = "Slot template deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Slot template not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_slot_template(
    State(state): State<AppState>,
    token: AuthToken,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;
    let is_admin = current.has_permission(&[ADMIN_SLOT_TEMPLATE]);

    SlotTemplateService::new(&state.db)
        .delete(uid, current.uid(), is_admin)
        .await?;

    Ok(Json(SuccessDto::ok()))
}
