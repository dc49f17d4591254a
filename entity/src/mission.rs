use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    /// Exposed over the API as both `description` and `shortDescription`.
    #[sea_orm(column_name = "shortDescription", column_type = "Text")]
    pub short_description: String,
    #[sea_orm(column_name = "detailedDescription", column_type = "Text")]
    pub detailed_description: String,
    #[sea_orm(column_name = "collapsedDescription", column_type = "Text", nullable)]
    pub collapsed_description: Option<String>,
    #[sea_orm(column_name = "briefingTime")]
    pub briefing_time: DateTimeUtc,
    #[sea_orm(column_name = "slottingTime")]
    pub slotting_time: DateTimeUtc,
    #[sea_orm(column_name = "startTime")]
    pub start_time: DateTimeUtc,
    #[sea_orm(column_name = "endTime")]
    pub end_time: DateTimeUtc,
    pub visibility: String,
    #[sea_orm(column_name = "techSupport", column_type = "Text", nullable)]
    pub tech_support: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub rules: Option<String>,
    #[sea_orm(column_name = "detailsMap", nullable)]
    pub details_map: Option<String>,
    #[sea_orm(column_name = "detailsGameMode", nullable)]
    pub details_game_mode: Option<String>,
    #[sea_orm(column_name = "requiredDLCs")]
    pub required_dlcs: Json,
    #[sea_orm(column_name = "bannerImageUrl", nullable)]
    pub banner_image_url: Option<String>,
    #[sea_orm(column_name = "gameServer", nullable)]
    pub game_server: Option<Json>,
    #[sea_orm(column_name = "voiceComms", nullable)]
    pub voice_comms: Option<Json>,
    pub repositories: Json,
    #[sea_orm(column_name = "missionToken", nullable)]
    pub mission_token: Option<Uuid>,
    #[sea_orm(column_name = "creatorUid")]
    pub creator_uid: Uuid,
    #[sea_orm(column_name = "communityUid", nullable)]
    pub community_uid: Option<Uuid>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorUid",
        to = "super::user::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::community::Entity",
        from = "Column::CommunityUid",
        to = "super::community::Column::Uid",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Community,
    #[sea_orm(has_many = "super::mission_slot_group::Entity")]
    MissionSlotGroup,
    #[sea_orm(has_many = "super::mission_access::Entity")]
    MissionAccess,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::community::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Community.def()
    }
}

impl Related<super::mission_slot_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionSlotGroup.def()
    }
}

impl Related<super::mission_access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionAccess.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
