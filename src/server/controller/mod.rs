//! HTTP handlers for the `/api/v1` endpoints.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service parameters and map domain models back into DTOs. Every
//! handler carries a `utoipa::path` annotation so the router can assemble the OpenAPI
//! document from the same route table.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::page::PageParams;

pub mod auth;
pub mod community;
pub mod import;
pub mod mission;
pub mod notification;
pub mod slot;
pub mod slot_template;
pub mod status;
pub mod user;

/// Upper bound for `limit` on every list endpoint.
pub const MAX_LIMIT: u64 = 100;

/// `limit`/`offset` query parameters shared by the list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page size, capped at 100
    pub limit: Option<u64>,
    /// Number of items to skip
    pub offset: Option<u64>,
}

impl PageQuery {
    /// Resolves the page, falling back to `default_limit` when no limit was sent.
    pub fn page(&self, default_limit: u64) -> PageParams {
        PageParams::new(
            self.limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT),
            self.offset.unwrap_or(0),
        )
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugQuery {
    pub slug: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring filter
    pub search: Option<String>,
}
