use crate::{
    model::mission::MissionVisibility,
    server::{
        data::mission::{visibility_condition, MissionRepository},
        model::mission::{MissionListParams, MissionViewer, UpdateMissionParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod update;
mod visibility;
