use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Pagination block flattened into list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub limit: u64,
    pub offset: u64,
    /// Number of items in this page.
    pub count: u64,
    pub total: u64,
    pub more_available: bool,
}

impl PaginationDto {
    pub fn new(limit: u64, offset: u64, count: u64, total: u64) -> Self {
        Self {
            limit,
            offset,
            count,
            total,
            more_available: offset + count < total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlugAvailableDto {
    pub available: bool,
}
