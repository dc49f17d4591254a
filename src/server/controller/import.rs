use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        import::{ImportMissionDto, ImportResponseDto, ImportResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken, Permission, ADMIN_MISSION, MISSION_IMPORT},
        service::import::{ImportOutcome, ImportService},
        state::AppState,
    },
};

/// Tag for grouping import endpoints in OpenAPI documentation
pub static IMPORT_TAG: &str = "import";

/// Import a mission from the legacy slotlist API.
///
/// With `dryRun` nothing is written and the response previews the mission and its
/// slotlist. Otherwise the mission, slot groups, slots and registrations are created
/// in one transaction, keeping their legacy UIDs.
///
/// # Access Control
/// - `admin.mission` or `mission.import`
///
/// # Returns
/// - `200 OK` - Preview or import result
/// - `400 Bad Request` - Legacy API unreachable, mission already exists or creator unknown
#[utoipa::path(
    post,
    path = "/api/v1/missions/import",
    tag = IMPORT_TAG,
    request_body = ImportMissionDto,
    responses(
        (status = 200, description = "Preview or import result", body = ImportResponseDto),
        (status = 400, description = "Import failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin.mission or mission.import", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn import_mission(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<ImportMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token)
        .require(&[Permission::Any(vec![
            ADMIN_MISSION.to_string(),
            MISSION_IMPORT.to_string(),
        ])])
        .await?;

    tracing::info!(
        "User {} importing legacy mission {} (dry run: {})",
        current.uid(),
        payload.slug,
        payload.dry_run
    );

    let outcome = ImportService::new(&state.db, &state.http_client, &state.legacy_api_url)
        .import(&payload.slug, payload.creator_uid, payload.dry_run)
        .await?;

    let response = match outcome {
        ImportOutcome::Preview(preview) => ImportResponseDto::Preview(preview),
        ImportOutcome::Imported(mission) => ImportResponseDto::Imported(ImportResultDto {
            success: true,
            message: format!("Imported mission '{}'", mission.title),
            mission_uid: mission.uid,
            mission_slug: mission.slug,
            mission_title: mission.title,
        }),
    };

    Ok(Json(response))
}
