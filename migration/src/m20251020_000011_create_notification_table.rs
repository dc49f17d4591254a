use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000002_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(pk_uuid(Notifications::Uid))
                    .col(uuid(Notifications::UserUid))
                    .col(string(Notifications::NotificationType))
                    .col(string_null(Notifications::Title))
                    .col(text(Notifications::Message))
                    .col(json_null(Notifications::AdditionalData))
                    .col(boolean(Notifications::Read).default(false))
                    .col(
                        timestamp_with_time_zone(Notifications::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Notifications::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifications_user_uid")
                            .from(Notifications::Table, Notifications::UserUid)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notifications {
    Table,
    Uid,
    #[sea_orm(iden = "userUid")]
    UserUid,
    #[sea_orm(iden = "notificationType")]
    NotificationType,
    Title,
    Message,
    #[sea_orm(iden = "additionalData")]
    AdditionalData,
    Read,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
