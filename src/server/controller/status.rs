use axum::{extract::State, response::IntoResponse, Json};

use crate::{model::status::StatusDto, server::state::AppState};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Report that the API is up.
///
/// # Returns
/// - `200 OK` - Status, uptime in seconds and crate version
#[utoipa::path(
    get,
    path = "/api/v1/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "API is operational", body = StatusDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusDto {
        status: "operational".to_string(),
        uptime: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
