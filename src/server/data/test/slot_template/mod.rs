use crate::server::{
    data::slot_template::SlotTemplateRepository,
    model::{page::PageParams, slot_template::UpdateSlotTemplateParams},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
