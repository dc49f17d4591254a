use crate::server::{
    error::AppError, model::user::UpdateUserParams, service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod update;
