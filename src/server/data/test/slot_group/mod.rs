use crate::server::{data::slot_group::SlotGroupRepository, model::slot::UpdateSlotGroupParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod shift_orders;
