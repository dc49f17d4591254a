use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_community_table::Communities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Uid))
                    .col(string(Users::Nickname))
                    .col(string_uniq(Users::SteamId))
                    .col(uuid_null(Users::CommunityUid))
                    .col(boolean(Users::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_community_uid")
                            .from(Users::Table, Users::CommunityUid)
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
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Uid,
    Nickname,
    #[sea_orm(iden = "steamId")]
    SteamId,
    #[sea_orm(iden = "communityUid")]
    CommunityUid,
    Active,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
