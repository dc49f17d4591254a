use crate::{
    model::community::ApplicationStatus,
    server::{
        data::{
            community::CommunityRepository, permission::PermissionRepository,
            user::UserRepository,
        },
        error::AppError,
        model::community::CreateCommunityParams,
        service::community::CommunityService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod applications;
mod create;
