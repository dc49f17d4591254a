//! Slotlist handlers: slot groups, slots, assignments and registrations.
//!
//! Reads go through mission visibility; every write resolves the mission first so the
//! editor and slot assigner checks can use its slug and creator.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        registration::{
            CreateRegistrationDto, RegistrationListDto, RegistrationResponseDto,
            UpdateRegistrationDto,
        },
        slot::{
            AssignSlotDto, CreateSlotDto, CreateSlotGroupDto, SlotGroupListDto,
            SlotGroupResponseDto, SlotListDto, SlotResponseDto, UpdateSlotDto, UpdateSlotGroupDto,
        },
    },
    server::{
        controller::{mission::require_editor, PageQuery},
        error::AppError,
        middleware::auth::{viewer_of, AuthGuard, AuthToken, Permission},
        model::slot::{CreateSlotGroupParams, CreateSlotParams, SlotGroup},
        service::{
            mission::MissionService, registration::RegistrationService, slot::SlotService,
        },
        state::AppState,
    },
};

/// Tag for grouping slotlist endpoints in OpenAPI documentation
pub static SLOT_TAG: &str = "slot";

const DEFAULT_REGISTRATION_LIMIT: u64 = 10;

/// Slotlist of a mission: slot groups ordered by `orderNumber`, each with its slots.
#[utoipa::path(
    get,
    path = "/api/v1/missions/{slug}/slots",
    tag = SLOT_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    responses(
        (status = 200, description = "Slotlist", body = SlotGroupListDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
)]
pub async fn get_slots(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).optional().await?;
    let mission = MissionService::new(&state.db)
        .get(&slug, &viewer_of(current.as_ref()))
        .await?;

    let slot_groups = SlotService::new(&state.db)
        .get_slotlist(mission.uid)
        .await?;

    Ok(Json(SlotGroupListDto {
        slot_groups: slot_groups.into_iter().map(SlotGroup::into_dto).collect(),
    }))
}

/// Insert a slot group.
///
/// The new group gets `orderNumber = insertAfter + 1`; groups at or behind that
/// position move back by one.
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/slotGroups",
    tag = SLOT_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    request_body = CreateSlotGroupDto,
    responses(
        (status = 200, description = "Slot group created", body = SlotGroupResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_slot_group(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<CreateSlotGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let slot_group = SlotService::new(&state.db)
        .create_slot_group(CreateSlotGroupParams::from_dto(mission.uid, payload))
        .await?;

    Ok(Json(SlotGroupResponseDto {
        slot_group: slot_group.into_dto(),
    }))
}

#[utoipa::path(
    patch,
    path = "/api/v1/missions/{slug}/slotGroups/{uid}",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot group UID")
    ),
    request_body = UpdateSlotGroupDto,
    responses(
        (status = 200, description = "Slot group updated", body = SlotGroupResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or slot group not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_slot_group(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
    Json(payload): Json<UpdateSlotGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let slot_group = SlotService::new(&state.db)
        .update_slot_group(mission.uid, uid, payload.into())
        .await?;

    Ok(Json(SlotGroupResponseDto {
        slot_group: slot_group.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/missions/{slug}/slotGroups/{uid}",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot group UID")
    ),
    responses(
        (status = 200, description = "Slot group deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or slot group not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_slot_group(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    SlotService::new(&state.db)
        .delete_slot_group(mission.uid, uid)
        .await?;

    Ok(Json(SuccessDto::ok()))
}

/// Create slots in one or more slot groups of the mission.
///
/// # Returns
/// - `200 OK` - The created slots in request order
/// - `400 Bad Request` - Invalid DLCs
/// - `404 Not Found` - A slot group does not belong to the mission
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/slots",
    tag = SLOT_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    request_body = Vec<CreateSlotDto>,
    responses(
        (status = 200, description = "Slots created", body = SlotListDto),
        (status = 400, description = "Invalid slot data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or slot group not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_slots(
    State(state): State<AppState>,
    token: AuthToken,
    Path(slug): Path<String>,
    Json(payload): Json<Vec<CreateSlotDto>>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let slots = SlotService::new(&state.db)
        .create_slots(
            mission.uid,
            payload.into_iter().map(CreateSlotParams::from).collect(),
        )
        .await?;

    Ok(Json(SlotListDto {
        slots: slots.into_iter().map(|s| s.into_dto()).collect(),
    }))
}

#[utoipa::path(
    patch,
    path = "/api/v1/missions/{slug}/slots/{uid}",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID")
    ),
    request_body = UpdateSlotDto,
    responses(
        (status = 200, description = "Slot updated", body = SlotResponseDto),
        (status = 400, description = "Invalid slot data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or slot not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_slot(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
    Json(payload): Json<UpdateSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    let slot = SlotService::new(&state.db)
        .update_slot(mission.uid, uid, payload.into())
        .await?;

    Ok(Json(SlotResponseDto {
        slot: slot.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/missions/{slug}/slots/{uid}",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID")
    ),
    responses(
        (status = 200, description = "Slot deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a mission editor", body = ErrorDto),
        (status = 404, description = "Mission or slot not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_slot(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (mission, _) = require_editor(&state, &token, &slug).await?;

    SlotService::new(&state.db).delete_slot(mission.uid, uid).await?;

    Ok(Json(SuccessDto::ok()))
}

/// Assign a user to a slot.
///
/// # Access Control
/// - Mission editor, `mission.slot.assign` or `admin.*`
///
/// # Returns
/// - `200 OK` - Updated slot; any registration of the user for it is removed
/// - `409 Conflict` - Slot already assigned to someone else and `force` not set
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/slots/{uid}/assign",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID")
    ),
    request_body = AssignSlotDto,
    responses(
        (status = 200, description = "Slot assigned", body = SlotResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to assign slots", body = ErrorDto),
        (status = 404, description = "Mission, slot or user not found", body = ErrorDto),
        (status = 409, description = "Slot already assigned", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn assign_slot(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
    Json(payload): Json<AssignSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let mission = MissionService::new(&state.db).find_model(&slug).await?;
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::SlotAssigner {
            slug: mission.slug.clone(),
            creator_uid: mission.creator_uid,
        }])
        .await?;

    let slot = SlotService::new(&state.db)
        .assign(&mission, uid, payload.user_uid, payload.force)
        .await?;

    Ok(Json(SlotResponseDto {
        slot: slot.into_dto(),
    }))
}

/// Remove the assignee from a slot.
///
/// # Access Control
/// - The assignee, a mission editor, `mission.slot.assign` or `admin.*`
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/slots/{uid}/unassign",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID")
    ),
    responses(
        (status = 200, description = "Slot unassigned", body = SlotResponseDto),
        (status = 400, description = "Slot is not assigned", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to unassign", body = ErrorDto),
        (status = 404, description = "Mission or slot not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unassign_slot(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let mission = MissionService::new(&state.db).find_model(&slug).await?;
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let slot_service = SlotService::new(&state.db);
    let slot = slot_service.find_slot(mission.uid, uid).await?;
    if slot.assignee_uid != Some(current.uid())
        && !current.can_assign_slots(&mission.slug, mission.creator_uid)
    {
        return Err(AppError::Forbidden(
            "Only the assignee or a slot assigner may unassign this slot".to_string(),
        ));
    }

    let slot = slot_service.unassign(&mission, uid, current.uid()).await?;

    Ok(Json(SlotResponseDto {
        slot: slot.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/missions/{slug}/slots/{uid}/registrations",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Registrations for the slot", body = RegistrationListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Mission or slot not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_registrations(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;
    let mission = MissionService::new(&state.db)
        .get(&slug, &current.viewer())
        .await?;

    let registrations = RegistrationService::new(&state.db)
        .list(mission.uid, uid, page.page(DEFAULT_REGISTRATION_LIMIT))
        .await?;

    Ok(Json(RegistrationListDto {
        limit: registrations.limit,
        offset: registrations.offset,
        total: registrations.total,
        registrations: registrations
            .items
            .into_iter()
            .map(|r| r.into_dto(false))
            .collect(),
    }))
}

/// Register the caller for a slot.
///
/// # Returns
/// - `200 OK` - Pending registration
/// - `400 Bad Request` - Already registered, or the slot is blocked
/// - `403 Forbidden` - Slot is restricted to another community
#[utoipa::path(
    post,
    path = "/api/v1/missions/{slug}/slots/{uid}/registrations",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID")
    ),
    request_body = CreateRegistrationDto,
    responses(
        (status = 200, description = "Registered", body = RegistrationResponseDto),
        (status = 400, description = "Already registered or slot blocked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Slot restricted to another community", body = ErrorDto),
        (status = 404, description = "Mission or slot not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_registration(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid)): Path<(String, Uuid)>,
    payload: Option<Json<CreateRegistrationDto>>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;
    let Json(payload) = payload.unwrap_or_default();

    let mission = MissionService::new(&state.db)
        .get(&slug, &current.viewer())
        .await?;

    let registration = RegistrationService::new(&state.db)
        .register(mission.uid, uid, &current.user, payload.comment)
        .await?;

    Ok(Json(RegistrationResponseDto {
        registration: registration.into_dto(false),
    }))
}

/// Confirm a registration.
///
/// Confirming assigns the slot to the registrant and removes the registration.
///
/// # Access Control
/// - Mission editor, `mission.slot.assign` or `admin.*`
#[utoipa::path(
    patch,
    path = "/api/v1/missions/{slug}/slots/{uid}/registrations/{registration_uid}",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID"),
        ("registration_uid" = Uuid, Path, description = "Registration UID")
    ),
    request_body = UpdateRegistrationDto,
    responses(
        (status = 200, description = "Registration processed", body = RegistrationResponseDto),
        (status = 400, description = "Slot already assigned", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to assign slots", body = ErrorDto),
        (status = 404, description = "Mission, slot or registration not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_registration(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid, registration_uid)): Path<(String, Uuid, Uuid)>,
    Json(payload): Json<UpdateRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let mission = MissionService::new(&state.db).find_model(&slug).await?;
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::SlotAssigner {
            slug: mission.slug.clone(),
            creator_uid: mission.creator_uid,
        }])
        .await?;

    let (registration, confirmed) = RegistrationService::new(&state.db)
        .update(
            &mission,
            uid,
            registration_uid,
            payload.confirmed,
            payload.suppress_notifications,
        )
        .await?;

    Ok(Json(RegistrationResponseDto {
        registration: registration.into_dto(confirmed),
    }))
}

/// Withdraw or remove a registration.
///
/// # Access Control
/// - The registrant, a mission editor, `mission.slot.assign` or `admin.*`
#[utoipa::path(
    delete,
    path = "/api/v1/missions/{slug}/slots/{uid}/registrations/{registration_uid}",
    tag = SLOT_TAG,
    params(
        ("slug" = String, Path, description = "Mission slug"),
        ("uid" = Uuid, Path, description = "Slot UID"),
        ("registration_uid" = Uuid, Path, description = "Registration UID")
    ),
    responses(
        (status = 200, description = "Registration deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Someone else's registration", body = ErrorDto),
        (status = 404, description = "Mission, slot or registration not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_registration(
    State(state): State<AppState>,
    token: AuthToken,
    Path((slug, uid, registration_uid)): Path<(String, Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let mission = MissionService::new(&state.db).find_model(&slug).await?;
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;
    let can_manage = current.can_assign_slots(&mission.slug, mission.creator_uid);

    RegistrationService::new(&state.db)
        .delete(mission.uid, uid, registration_uid, current.uid(), can_manage)
        .await?;

    Ok(Json(SuccessDto::ok()))
}
