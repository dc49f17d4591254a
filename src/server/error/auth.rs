use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::detail;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable `Authorization` header was sent.
    ///
    /// Tokens that fail to decode (bad signature, expired, wrong issuer or audience)
    /// are treated the same way. Results in 401 Unauthorized.
    #[error("Authentication required")]
    MissingToken,

    /// The token decoded but its contents could not be used.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid authentication token")]
    InvalidToken,

    /// The token references a user that no longer exists.
    ///
    /// Results in 404 Not Found.
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    /// The user's account has been deactivated by an administrator.
    ///
    /// Results in 403 Forbidden.
    #[error("User {0} is deactivated")]
    UserDeactivated(Uuid),

    /// The user lacks the permission required by the endpoint.
    ///
    /// The second field carries the reason, which is logged but not returned to the
    /// client. Results in 403 Forbidden.
    #[error("User {0} denied access: {1}")]
    AccessDenied(Uuid, String),

    /// Steam rejected the OpenID assertion or the claimed identity was malformed.
    ///
    /// Results in 400 Bad Request.
    #[error("Steam login verification failed: {0}")]
    SteamVerificationFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `UserNotFound` → 404 Not Found with "User not found"
/// - `UserDeactivated` → 403 Forbidden
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `SteamVerificationFailed` → 400 Bad Request
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => detail(
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::InvalidToken => detail(
                StatusCode::UNAUTHORIZED,
                "Invalid authentication token".to_string(),
            ),
            Self::UserNotFound(_) => detail(StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::UserDeactivated(_) => detail(
                StatusCode::FORBIDDEN,
                "User account is deactivated".to_string(),
            ),
            Self::AccessDenied(_, _) => detail(StatusCode::FORBIDDEN, "Forbidden".to_string()),
            Self::SteamVerificationFailed(_) => detail(
                StatusCode::BAD_REQUEST,
                "Invalid Steam login response".to_string(),
            ),
        }
    }
}
