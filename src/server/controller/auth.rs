use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{
            AccountResponseDto, AccountUpdatedDto, DeleteAccountDto, ReturnUrlQuery,
            SteamLoginDto, SteamLoginUrlDto, TokenDto, UpdateAccountDto,
        },
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, AuthToken},
        service::{auth::AuthService, steam::SteamService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn steam_service(state: &AppState) -> SteamService<'_> {
    SteamService::new(
        &state.http_client,
        &state.steam_openid_url,
        &state.steam_api_url,
        &state.steam_api_secret,
    )
}

/// Build the Steam OpenID login URL.
///
/// The realm is the JWT issuer; `return_url` defaults to it as well.
///
/// # Returns
/// - `200 OK` - URL to send the browser to
#[utoipa::path(
    get,
    path = "/api/v1/auth/steam",
    tag = AUTH_TAG,
    params(ReturnUrlQuery),
    responses(
        (status = 200, description = "Steam login URL", body = SteamLoginUrlDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_steam_login_url(
    State(state): State<AppState>,
    Query(query): Query<ReturnUrlQuery>,
) -> Result<impl IntoResponse, AppError> {
    let realm = state.jwt.issuer();
    let return_url = query.return_url.as_deref().unwrap_or(realm);

    let url = steam_service(&state).login_url(return_url, realm)?;

    Ok(Json(SteamLoginUrlDto { url }))
}

/// Complete a Steam login.
///
/// Verifies the OpenID callback URL with Steam, creates the user on first login and
/// returns a signed token.
///
/// # Returns
/// - `200 OK` - Token and token user
/// - `400 Bad Request` - Steam rejected the callback
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/api/v1/auth/steam",
    tag = AUTH_TAG,
    params(ReturnUrlQuery),
    request_body = SteamLoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Steam verification failed", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn steam_login(
    State(state): State<AppState>,
    Json(payload): Json<SteamLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let steam = steam_service(&state);
    let steam_id = steam.verify(&payload.url).await?;

    let (token, user) = AuthService::new(&state.db, &state.jwt)
        .login(&steam_id, &steam)
        .await?;

    Ok(Json(TokenDto {
        token,
        user: user.to_token_dto(),
    }))
}

/// Issue a fresh token for the caller.
///
/// # Returns
/// - `200 OK` - New token carrying the current permissions
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Account deactivated
/// - `404 Not Found` - Token user no longer exists
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Refreshed token", body = TokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let Some(claims) = &token.0 else {
        return Err(AuthError::MissingToken.into());
    };

    let (token, user) = AuthService::new(&state.db, &state.jwt)
        .refresh(claims.user.uid)
        .await?;

    Ok(Json(TokenDto {
        token,
        user: user.to_token_dto(),
    }))
}

/// Get the caller's account, including private fields and permissions.
#[utoipa::path(
    get,
    path = "/api/v1/auth/account",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Own account", body = AccountResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_account(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    Ok(Json(AccountResponseDto {
        user: current.user.into_account_dto(current.permissions),
    }))
}

/// Change the caller's nickname.
///
/// # Returns
/// - `200 OK` - Updated account and a token carrying the new nickname
/// - `400 Bad Request` - Empty nickname
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    patch,
    path = "/api/v1/auth/account",
    tag = AUTH_TAG,
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = AccountUpdatedDto),
        (status = 400, description = "Invalid nickname", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_account(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<UpdateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    let (token, user, permissions) = AuthService::new(&state.db, &state.jwt)
        .update_account(current.uid(), payload.nickname)
        .await?;

    Ok(Json(AccountUpdatedDto {
        user: user.into_account_dto(permissions),
        token,
    }))
}

/// Delete the caller's account.
///
/// The current nickname must be repeated in the body.
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `401 Unauthorized` - Not authenticated
/// - `409 Conflict` - Nickname does not match
#[utoipa::path(
    post,
    path = "/api/v1/auth/account/delete",
    tag = AUTH_TAG,
    request_body = DeleteAccountDto,
    responses(
        (status = 200, description = "Account deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Nickname mismatch", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<DeleteAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &token).authenticate().await?;

    AuthService::new(&state.db, &state.jwt)
        .delete_account(current.uid(), &payload.nickname)
        .await?;

    Ok(Json(SuccessDto::ok()))
}
