use crate::server::{
    data::notification::NotificationRepository,
    model::{notification::CreateNotificationParams, page::PageParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod mark_read;
