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
                    .table(Missions::Table)
                    .if_not_exists()
                    .col(pk_uuid(Missions::Uid))
                    .col(string_uniq(Missions::Slug))
                    .col(string(Missions::Title))
                    .col(text(Missions::ShortDescription))
                    .col(text(Missions::DetailedDescription))
                    .col(text_null(Missions::CollapsedDescription))
                    .col(timestamp_with_time_zone(Missions::BriefingTime))
                    .col(timestamp_with_time_zone(Missions::SlottingTime))
                    .col(timestamp_with_time_zone(Missions::StartTime))
                    .col(timestamp_with_time_zone(Missions::EndTime))
                    .col(string(Missions::Visibility).default("hidden"))
                    .col(text_null(Missions::TechSupport))
                    .col(text_null(Missions::Rules))
                    .col(string_null(Missions::DetailsMap))
                    .col(string_null(Missions::DetailsGameMode))
                    .col(json(Missions::RequiredDlcs))
                    .col(string_null(Missions::BannerImageUrl))
                    .col(json_null(Missions::GameServer))
                    .col(json_null(Missions::VoiceComms))
                    .col(json(Missions::Repositories))
                    .col(uuid_null(Missions::MissionToken))
                    .col(uuid(Missions::CreatorUid))
                    .col(uuid_null(Missions::CommunityUid))
                    .col(
                        timestamp_with_time_zone(Missions::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Missions::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_creator_uid")
                            .from(Missions::Table, Missions::CreatorUid)
                            .to(Users::Table, Users::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_community_uid")
                            .from(Missions::Table, Missions::CommunityUid)
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
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Missions {
    Table,
    Uid,
    Slug,
    Title,
    #[sea_orm(iden = "shortDescription")]
    ShortDescription,
    #[sea_orm(iden = "detailedDescription")]
    DetailedDescription,
    #[sea_orm(iden = "collapsedDescription")]
    CollapsedDescription,
    #[sea_orm(iden = "briefingTime")]
    BriefingTime,
    #[sea_orm(iden = "slottingTime")]
    SlottingTime,
    #[sea_orm(iden = "startTime")]
    StartTime,
    #[sea_orm(iden = "endTime")]
    EndTime,
    Visibility,
    #[sea_orm(iden = "techSupport")]
    TechSupport,
    Rules,
    #[sea_orm(iden = "detailsMap")]
    DetailsMap,
    #[sea_orm(iden = "detailsGameMode")]
    DetailsGameMode,
    #[sea_orm(iden = "requiredDLCs")]
    RequiredDlcs,
    #[sea_orm(iden = "bannerImageUrl")]
    BannerImageUrl,
    #[sea_orm(iden = "gameServer")]
    GameServer,
    #[sea_orm(iden = "voiceComms")]
    VoiceComms,
    Repositories,
    #[sea_orm(iden = "missionToken")]
    MissionToken,
    #[sea_orm(iden = "creatorUid")]
    CreatorUid,
    #[sea_orm(iden = "communityUid")]
    CommunityUid,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
