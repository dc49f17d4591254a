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
                    .table(CommunityApplications::Table)
                    .if_not_exists()
                    .col(pk_uuid(CommunityApplications::Uid))
                    .col(uuid(CommunityApplications::UserUid))
                    .col(uuid(CommunityApplications::CommunityUid))
                    .col(string(CommunityApplications::Status).default("submitted"))
                    .col(text(CommunityApplications::ApplicationText))
                    .col(
                        timestamp_with_time_zone(CommunityApplications::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CommunityApplications::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_community_applications_user_uid")
                            .from(CommunityApplications::Table, CommunityApplications::UserUid)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_community_applications_community_uid")
                            .from(
                                CommunityApplications::Table,
                                CommunityApplications::CommunityUid,
                            )
                            .to(Communities::Table, Communities::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_community_applications_user_uid_community_uid")
                    .table(CommunityApplications::Table)
                    .col(CommunityApplications::UserUid)
                    .col(CommunityApplications::CommunityUid)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommunityApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommunityApplications {
    #[sea_orm(iden = "communityApplications")]
    Table,
    Uid,
    #[sea_orm(iden = "userUid")]
    UserUid,
    #[sea_orm(iden = "communityUid")]
    CommunityUid,
    Status,
    #[sea_orm(iden = "applicationText")]
    ApplicationText,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
