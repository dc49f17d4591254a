use crate::server::data::mission_access::MissionAccessRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod has_access;
