//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for the Steam and legacy slotlist APIs
//! - JWT keys for signing and verifying bearer tokens

use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, util::jwt::JwtKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `reqwest::Client` uses an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound API requests.
    ///
    /// Configured without redirects; shared by the Steam and import services.
    pub http_client: reqwest::Client,

    /// Keys used to sign and verify the API's JWTs.
    pub jwt: JwtKeys,

    /// Steam Web API key used to look up player nicknames.
    pub steam_api_secret: String,

    /// Steam OpenID endpoint.
    pub steam_openid_url: String,

    /// Steam Web API base URL.
    pub steam_api_url: String,

    /// Base URL of the legacy slotlist API used by mission imports.
    pub legacy_api_url: String,

    /// Server start, reported as uptime by the status endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            jwt: JwtKeys::from_config(config),
            steam_api_secret: config.steam_api_secret.clone(),
            steam_openid_url: config.steam_openid_url.clone(),
            steam_api_url: config.steam_api_url.clone(),
            legacy_api_url: config.legacy_api_url.clone(),
            started_at: Instant::now(),
        }
    }
}
