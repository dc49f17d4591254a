use crate::server::data::permission::PermissionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod prefix;
