use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_community_table::Communities,
    m20251020_000002_create_user_table::Users,
    m20251020_000004_create_mission_table::Missions,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionAccesses::Table)
                    .if_not_exists()
                    .col(pk_uuid(MissionAccesses::Uid))
                    .col(uuid(MissionAccesses::MissionUid))
                    .col(uuid_null(MissionAccesses::UserUid))
                    .col(uuid_null(MissionAccesses::CommunityUid))
                    .col(
                        timestamp_with_time_zone(MissionAccesses::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MissionAccesses::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_accesses_mission_uid")
                            .from(MissionAccesses::Table, MissionAccesses::MissionUid)
                            .to(Missions::Table, Missions::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_accesses_user_uid")
                            .from(MissionAccesses::Table, MissionAccesses::UserUid)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_accesses_community_uid")
                            .from(MissionAccesses::Table, MissionAccesses::CommunityUid)
                            .to(Communities::Table, Communities::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionAccesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionAccesses {
    #[sea_orm(iden = "missionAccesses")]
    Table,
    Uid,
    #[sea_orm(iden = "missionUid")]
    MissionUid,
    #[sea_orm(iden = "userUid")]
    UserUid,
    #[sea_orm(iden = "communityUid")]
    CommunityUid,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
