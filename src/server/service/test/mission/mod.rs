use crate::{
    model::mission::CreateMissionDto,
    server::{
        data::{permission::PermissionRepository, user::UserRepository},
        error::AppError,
        middleware::auth::CurrentUser,
        model::mission::MissionListParams,
        service::mission::MissionService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod visibility;

fn create_dto(title: &str, slug: Option<&str>) -> CreateMissionDto {
    CreateMissionDto {
        title: title.to_string(),
        slug: slug.map(str::to_string),
        description: None,
        detailed_description: None,
        collapsed_description: None,
        briefing_time: None,
        slotting_time: None,
        start_time: None,
        end_time: None,
        visibility: None,
        tech_teleport: None,
        tech_respawn: None,
        details_map: None,
        details_game_mode: None,
        required_dlcs: None,
        game_server: None,
        voice_comms: None,
        repositories: None,
        rules_of_engagement: None,
        banner_image_url: None,
        community_uid: None,
    }
}
