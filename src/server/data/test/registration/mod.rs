use crate::server::{data::registration::RegistrationRepository, model::page::PageParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_slot_paginated;
