use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Communities::Table)
                    .if_not_exists()
                    .col(pk_uuid(Communities::Uid))
                    .col(string(Communities::Name))
                    .col(string(Communities::Tag))
                    .col(string_uniq(Communities::Slug))
                    .col(string_null(Communities::Website))
                    .col(string_null(Communities::LogoUrl))
                    .col(json(Communities::GameServers))
                    .col(json(Communities::VoiceComms))
                    .col(json(Communities::Repositories))
                    .col(
                        timestamp_with_time_zone(Communities::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Communities::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Communities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Communities {
    Table,
    Uid,
    Name,
    Tag,
    Slug,
    Website,
    #[sea_orm(iden = "logoUrl")]
    LogoUrl,
    #[sea_orm(iden = "gameServers")]
    GameServers,
    #[sea_orm(iden = "voiceComms")]
    VoiceComms,
    Repositories,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
