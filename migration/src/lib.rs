pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_community_table;
mod m20251020_000002_create_user_table;
mod m20251020_000003_create_permission_table;
mod m20251020_000004_create_mission_table;
mod m20251020_000005_create_mission_slot_group_table;
mod m20251020_000006_create_mission_slot_table;
mod m20251020_000007_create_mission_slot_registration_table;
mod m20251020_000008_create_mission_slot_template_table;
mod m20251020_000009_create_mission_access_table;
mod m20251020_000010_create_community_application_table;
mod m20251020_000011_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_community_table::Migration),
            Box::new(m20251020_000002_create_user_table::Migration),
            Box::new(m20251020_000003_create_permission_table::Migration),
            Box::new(m20251020_000004_create_mission_table::Migration),
            Box::new(m20251020_000005_create_mission_slot_group_table::Migration),
            Box::new(m20251020_000006_create_mission_slot_table::Migration),
            Box::new(m20251020_000007_create_mission_slot_registration_table::Migration),
            Box::new(m20251020_000008_create_mission_slot_template_table::Migration),
            Box::new(m20251020_000009_create_mission_access_table::Migration),
            Box::new(m20251020_000010_create_community_application_table::Migration),
            Box::new(m20251020_000011_create_notification_table::Migration),
        ]
    }
}
