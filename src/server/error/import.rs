use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::detail;

/// Failures of the one-time import from the legacy slotlist API.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The legacy API could not be reached or returned an unusable body.
    #[error("Failed to fetch mission from legacy API: {0}")]
    ApiFetch(String),

    /// A mission with the same slug already exists locally.
    #[error("Mission with slug '{0}' already exists")]
    MissionAlreadyExists(String),

    /// The legacy slug cannot be used as a local slug.
    #[error("Mission slug '{0}' is not a valid slug")]
    InvalidSlug(String),

    /// The requested creator does not exist.
    #[error("Creator user {0} not found")]
    CreatorNotFound(Uuid),

    /// No creator was requested and the legacy mission carries none.
    #[error("Could not determine mission creator from legacy data")]
    MissingCreator,
}

/// All import errors map to 400 Bad Request carrying the error message.
impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        tracing::warn!("Mission import failed: {}", self);

        detail(StatusCode::BAD_REQUEST, self.to_string())
    }
}
