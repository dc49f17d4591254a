use crate::server::{
    data::{
        notification::NotificationRepository, registration::RegistrationRepository,
        slot::SlotRepository, user::UserRepository,
    },
    error::AppError,
    model::{page::PageParams, user::User},
    service::registration::RegistrationService,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod register;
mod update;

async fn load_user(db: &DatabaseConnection, uid: Uuid) -> User {
    UserRepository::new(db)
        .find_by_uid(uid)
        .await
        .unwrap()
        .unwrap()
}
