use crate::server::{
    data::{registration::RegistrationRepository, slot::SlotRepository, user::UserRepository},
    error::AppError,
    service::merge::{MergeOutcome, MergeService},
};
use test_utils::{builder::TestBuilder, factory};

mod merge_duplicates;
