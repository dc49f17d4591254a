use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000004_create_mission_table::Missions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionSlotGroups::Table)
                    .if_not_exists()
                    .col(pk_uuid(MissionSlotGroups::Uid))
                    .col(string(MissionSlotGroups::Title))
                    .col(text_null(MissionSlotGroups::Description))
                    .col(integer(MissionSlotGroups::OrderNumber).default(0))
                    .col(uuid(MissionSlotGroups::MissionUid))
                    .col(
                        timestamp_with_time_zone(MissionSlotGroups::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MissionSlotGroups::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slot_groups_mission_uid")
                            .from(MissionSlotGroups::Table, MissionSlotGroups::MissionUid)
                            .to(Missions::Table, Missions::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionSlotGroups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionSlotGroups {
    #[sea_orm(iden = "missionSlotGroups")]
    Table,
    Uid,
    Title,
    Description,
    #[sea_orm(iden = "orderNumber")]
    OrderNumber,
    #[sea_orm(iden = "missionUid")]
    MissionUid,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
