//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

pub mod auth;
pub mod config;
pub mod import;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, import::ImportError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Legacy mission import error.
    ///
    /// Delegates to `ImportError::into_response()`, always 400 Bad Request.
    #[error(transparent)]
    ImportErr(#[from] ImportError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Token signing error from jsonwebtoken.
    ///
    /// Results in 500 Internal Server Error. Decoding failures never reach this
    /// variant, they are treated as a missing token.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// I/O error while binding the listener or serving requests.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but may not perform the operation.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// Request collides with existing state (taken slug, duplicate application).
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `ImportErr`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types (DbErr, ReqwestErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ImportErr(err) => err.into_response(),
            Self::NotFound(msg) => detail(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => detail(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => detail(StatusCode::FORBIDDEN, msg),
            Self::Conflict(msg) => detail(StatusCode::CONFLICT, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                detail(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

impl AppError {
    /// Turns a unique-constraint violation into `conflict`, keeping other database
    /// errors as they are.
    ///
    /// Covers inserts that lost a race against a concurrent duplicate after the
    /// existence check passed.
    pub fn on_unique_violation(err: sea_orm::DbErr, conflict: impl FnOnce() -> AppError) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                conflict()
            }
            _ => err.into(),
        }
    }
}

/// Builds a `{"detail": msg}` response with the given status.
pub(crate) fn detail(status: StatusCode, msg: String) -> Response {
    (status, Json(ErrorDto { detail: msg })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client. Used as a fallback for errors without a specific HTTP response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
