use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportMissionDto {
    pub slug: String,
    pub creator_uid: Option<Uuid>,
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreviewCommunityDto {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreviewMissionDto {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub visibility: String,
    pub community: Option<PreviewCommunityDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreviewSlotDto {
    pub title: String,
    /// Assignee nickname, `External: <name>` or `Unassigned`.
    pub assignee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSlotGroupDto {
    pub title: String,
    pub slot_count: u64,
    pub slots: Vec<PreviewSlotDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTotalsDto {
    pub slot_groups: u64,
    pub slots: u64,
}

/// What an import would write, returned for dry runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreviewDto {
    pub mission: PreviewMissionDto,
    pub slot_groups: Vec<PreviewSlotGroupDto>,
    pub totals: PreviewTotalsDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportResultDto {
    pub success: bool,
    pub message: String,
    pub mission_uid: Uuid,
    pub mission_slug: String,
    pub mission_title: String,
}

/// Dry runs answer with the preview, real imports with the result.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ImportResponseDto {
    Preview(ImportPreviewDto),
    Imported(ImportResultDto),
}
