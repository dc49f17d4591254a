use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_ISSUER: &str = "https://slotlist.online";
const DEFAULT_JWT_AUDIENCE: &str = "https://slotlist.online";
const DEFAULT_JWT_EXPIRES_IN: i64 = 604_800;
const DEFAULT_LEGACY_API_URL: &str = "https://api.slotlist.info";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

const STEAM_OPENID_URL: &str = "https://steamcommunity.com/openid/login";
const STEAM_API_URL: &str = "https://api.steampowered.com";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub run_migrations: bool,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,

    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub jwt_expires_in: i64,
    pub jwt_algorithm: Algorithm,

    pub steam_api_secret: String,
    pub steam_openid_url: String,
    pub steam_api_url: String,

    pub legacy_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            run_migrations: parse_bool("RUN_MIGRATIONS", true)?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: optional("JWT_ISSUER", DEFAULT_JWT_ISSUER),
            jwt_audience: optional("JWT_AUDIENCE", DEFAULT_JWT_AUDIENCE),
            jwt_expires_in: parse_i64("JWT_EXPIRES_IN", DEFAULT_JWT_EXPIRES_IN)?,
            jwt_algorithm: parse_algorithm(&optional("JWT_ALGORITHM", "HS256"))?,
            steam_api_secret: required("STEAM_API_SECRET")?,
            steam_openid_url: STEAM_OPENID_URL.to_string(),
            steam_api_url: STEAM_API_URL.to_string(),
            legacy_api_url: optional("SLOTLIST_LEGACY_API_URL", DEFAULT_LEGACY_API_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(value) => match value.to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                reason: format!("expected a boolean, got '{}'", other),
            }),
        },
        Err(_) => Ok(default),
    }
}

/// Only the HMAC family is accepted since tokens are signed with a shared secret.
fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value.to_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::InvalidValue {
            name: "JWT_ALGORITHM".to_string(),
            reason: format!("unsupported algorithm '{}'", other),
        }),
    }
}
