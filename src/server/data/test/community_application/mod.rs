use crate::{
    model::community::ApplicationStatus,
    server::{data::community_application::CommunityApplicationRepository, model::page::PageParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_community_paginated;
