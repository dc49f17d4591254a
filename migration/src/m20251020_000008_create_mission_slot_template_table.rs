use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_community_table::Communities,
    m20251020_000002_create_user_table::Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionSlotTemplates::Table)
                    .if_not_exists()
                    .col(pk_uuid(MissionSlotTemplates::Uid))
                    .col(string(MissionSlotTemplates::Title))
                    .col(uuid(MissionSlotTemplates::CreatorUid))
                    .col(uuid_null(MissionSlotTemplates::CommunityUid))
                    .col(json(MissionSlotTemplates::SlotGroups))
                    .col(
                        timestamp_with_time_zone(MissionSlotTemplates::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MissionSlotTemplates::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slot_templates_creator_uid")
                            .from(MissionSlotTemplates::Table, MissionSlotTemplates::CreatorUid)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slot_templates_community_uid")
                            .from(
                                MissionSlotTemplates::Table,
                                MissionSlotTemplates::CommunityUid,
                            )
                            .to(Communities::Table, Communities::Uid)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionSlotTemplates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionSlotTemplates {
    #[sea_orm(iden = "missionSlotTemplates")]
    Table,
    Uid,
    Title,
    #[sea_orm(iden = "creatorUid")]
    CreatorUid,
    #[sea_orm(iden = "communityUid")]
    CommunityUid,
    #[sea_orm(iden = "slotGroups")]
    SlotGroups,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
