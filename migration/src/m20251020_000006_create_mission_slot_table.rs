use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_community_table::Communities,
    m20251020_000002_create_user_table::Users,
    m20251020_000005_create_mission_slot_group_table::MissionSlotGroups,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionSlots::Table)
                    .if_not_exists()
                    .col(pk_uuid(MissionSlots::Uid))
                    .col(string(MissionSlots::Title))
                    .col(text_null(MissionSlots::Description))
                    .col(text_null(MissionSlots::DetailedDescription))
                    .col(integer(MissionSlots::OrderNumber).default(0))
                    .col(json(MissionSlots::RequiredDlcs))
                    .col(string_null(MissionSlots::ExternalAssignee))
                    .col(uuid(MissionSlots::SlotGroupUid))
                    .col(uuid_null(MissionSlots::AssigneeUid))
                    .col(uuid_null(MissionSlots::RestrictedCommunityUid))
                    .col(boolean(MissionSlots::Blocked).default(false))
                    .col(boolean(MissionSlots::Reserve).default(false))
                    .col(boolean(MissionSlots::AutoAssignable).default(true))
                    .col(
                        timestamp_with_time_zone(MissionSlots::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MissionSlots::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slots_slot_group_uid")
                            .from(MissionSlots::Table, MissionSlots::SlotGroupUid)
                            .to(MissionSlotGroups::Table, MissionSlotGroups::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slots_assignee_uid")
                            .from(MissionSlots::Table, MissionSlots::AssigneeUid)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_slots_restricted_community_uid")
                            .from(MissionSlots::Table, MissionSlots::RestrictedCommunityUid)
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
            .drop_table(Table::drop().table(MissionSlots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionSlots {
    #[sea_orm(iden = "missionSlots")]
    Table,
    Uid,
    Title,
    Description,
    #[sea_orm(iden = "detailedDescription")]
    DetailedDescription,
    #[sea_orm(iden = "orderNumber")]
    OrderNumber,
    #[sea_orm(iden = "requiredDLCs")]
    RequiredDlcs,
    #[sea_orm(iden = "externalAssignee")]
    ExternalAssignee,
    #[sea_orm(iden = "slotGroupUid")]
    SlotGroupUid,
    #[sea_orm(iden = "assigneeUid")]
    AssigneeUid,
    #[sea_orm(iden = "restrictedCommunityUid")]
    RestrictedCommunityUid,
    Blocked,
    Reserve,
    #[sea_orm(iden = "autoAssignable")]
    AutoAssignable,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
