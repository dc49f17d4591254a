use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: String,
    /// Seconds since the server started.
    pub uptime: u64,
    pub version: String,
}
