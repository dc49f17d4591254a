use crate::server::{
    data::slot::SlotRepository,
    model::slot::{CreateSlotParams, NewSlot},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod hydrate;
mod reassign_user;
