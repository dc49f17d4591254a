use crate::server::{
    data::user::UserRepository,
    model::{
        page::PageParams,
        user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_duplicate_nicknames;
mod get_members;
mod set_community;
