use crate::server::{
    data::community::CommunityRepository,
    model::{
        community::{CreateCommunityParams, UpdateCommunityParams},
        page::PageParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
