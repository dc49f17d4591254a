use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000002_create_user_table::Users,
    m20251020_000006_create_mission_slot_table::MissionSlots,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionSlotRegistrations::Table)
                    .if_not_exists()
                    .col(pk_uuid(MissionSlotRegistrations::Uid))
                    .col(uuid(MissionSlotRegistrations::UserUid))
                    .col(uuid(MissionSlotRegistrations::SlotUid))
                    .col(text_null(MissionSlotRegistrations::Comment))
                    .col(
                        timestamp_with_time_zone(MissionSlotRegistrations::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MissionSlotRegistrations::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slot_registrations_user_uid")
                            .from(
                                MissionSlotRegistrations::Table,
                                MissionSlotRegistrations::UserUid,
                            )
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slot_registrations_slot_uid")
                            .from(
                                MissionSlotRegistrations::Table,
                                MissionSlotRegistrations::SlotUid,
                            )
                            .to(MissionSlots::Table, MissionSlots::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mission_slot_registrations_user_uid_slot_uid")
                    .table(MissionSlotRegistrations::Table)
                    .col(MissionSlotRegistrations::UserUid)
                    .col(MissionSlotRegistrations::SlotUid)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(MissionSlotRegistrations::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionSlotRegistrations {
    #[sea_orm(iden = "missionSlotRegistrations")]
    Table,
    Uid,
    #[sea_orm(iden = "userUid")]
    UserUid,
    #[sea_orm(iden = "slotUid")]
    SlotUid,
    Comment,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
