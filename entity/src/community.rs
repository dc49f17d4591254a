use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "communities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    pub name: String,
    pub tag: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(nullable)]
    pub website: Option<String>,
    #[sea_orm(column_name = "logoUrl", nullable)]
    pub logo_url: Option<String>,
    #[sea_orm(column_name = "gameServers")]
    pub game_servers: Json,
    #[sea_orm(column_name = "voiceComms")]
    pub voice_comms: Json,
    pub repositories: Json,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::mission::Entity")]
    Mission,
    #[sea_orm(has_many = "super::community_application::Entity")]
    CommunityApplication,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl Related<super::community_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommunityApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
