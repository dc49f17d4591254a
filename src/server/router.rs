//! Route table, OpenAPI document and the HTTP middleware stack.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, community, import, mission, notification, slot, slot_template, status, user,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Replenish one request token every 100ms per client IP.
const RATE_LIMIT_PERIOD_MS: u64 = 100;
const RATE_LIMIT_BURST: u32 = 50;

#[derive(OpenApi)]
#[openapi(
    info(title = "slotlist API", description = "Mission planning and slotting for ArmA 3 communities"),
    modifiers(&SecurityAddon),
    tags(
        (name = "status", description = "Service status"),
        (name = "auth", description = "Steam login, tokens and the caller's account"),
        (name = "community", description = "Communities, applications and community permissions"),
        (name = "user", description = "User profiles and global permissions"),
        (name = "mission", description = "Missions, mission permissions and access grants"),
        (name = "slot", description = "Slot groups, slots, assignments and registrations"),
        (name = "slot_template", description = "Reusable slotlist templates"),
        (name = "notification", description = "Notifications of the caller"),
        (name = "import", description = "Mission import from the legacy API")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by authenticated endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Components::new)
            .add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
    }
}

/// Every `/api/v1` route together with the generated OpenAPI document.
///
/// Handlers sharing a path are registered in one `routes!` call; the path and method
/// come from each handler's `utoipa::path` annotation.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(status::get_status))
        // Auth
        .routes(routes!(auth::get_steam_login_url, auth::steam_login))
        .routes(routes!(auth::refresh_token))
        .routes(routes!(auth::get_account, auth::update_account))
        .routes(routes!(auth::delete_account))
        // Communities
        .routes(routes!(
            community::get_communities,
            community::create_community
        ))
        .routes(routes!(community::get_slug_available))
        .routes(routes!(
            community::get_community,
            community::update_community,
            community::delete_community
        ))
        .routes(routes!(community::get_members))
        .routes(routes!(community::get_missions))
        .routes(routes!(
            community::get_applications,
            community::create_application
        ))
        .routes(routes!(community::get_application_status))
        .routes(routes!(community::update_application))
        .routes(routes!(
            community::get_permissions,
            community::create_permission
        ))
        .routes(routes!(community::delete_permission))
        // Users
        .routes(routes!(user::get_users))
        .routes(routes!(
            user::get_user,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(user::get_user_missions))
        .routes(routes!(
            user::get_user_permissions,
            user::create_user_permission
        ))
        .routes(routes!(user::delete_user_permission))
        // Missions
        .routes(routes!(mission::get_missions, mission::create_mission))
        .routes(routes!(mission::get_slug_available))
        .routes(routes!(import::import_mission))
        .routes(routes!(
            mission::get_mission,
            mission::update_mission,
            mission::delete_mission
        ))
        .routes(routes!(mission::get_permissions, mission::create_permission))
        .routes(routes!(mission::delete_permission))
        .routes(routes!(mission::get_accesses, mission::create_access))
        .routes(routes!(mission::delete_access))
        // Slotlist
        .routes(routes!(slot::get_slots, slot::create_slots))
        .routes(routes!(slot::create_slot_group))
        .routes(routes!(slot::update_slot_group, slot::delete_slot_group))
        .routes(routes!(slot::update_slot, slot::delete_slot))
        .routes(routes!(slot::assign_slot))
        .routes(routes!(slot::unassign_slot))
        .routes(routes!(slot::get_registrations, slot::create_registration))
        .routes(routes!(
            slot::update_registration,
            slot::delete_registration
        ))
        // Slot templates
        .routes(routes!(
            slot_template::get_slot_templates,
            slot_template::create_slot_template
        ))
        .routes(routes!(
            slot_template::get_slot_template,
            slot_template::update_slot_template,
            slot_template::delete_slot_template
        ))
        // Notifications
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_all_read))
        .routes(routes!(
            notification::get_notification,
            notification::delete_notification
        ))
        .routes(routes!(notification::mark_read))
}

/// Builds the complete application router.
///
/// Serves Swagger UI at `/api/docs` and wraps every route in tracing, CORS and the
/// per-IP rate limiter. The rate limiter keys on the peer address, so the router has to
/// be served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Arguments
/// - `config` - Application configuration providing the allowed CORS origins
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router ready for `with_state`
/// - `Err(AppError::ConfigErr)` - An allowed origin is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = api_router().split_for_parts();

    let governor = GovernorConfigBuilder::default()
        .per_millisecond(RATE_LIMIT_PERIOD_MS)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(fallback)
        .layer(GovernorLayer::new(Arc::new(governor)))
        .layer(cors_layer(&config.cors_allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

async fn fallback() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Any origin when `origins` is empty, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        return Ok(cors.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("'{}': {}", origin, e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(origins))
}
