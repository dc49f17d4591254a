use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "missionAccesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    #[sea_orm(column_name = "missionUid")]
    pub mission_uid: Uuid,
    #[sea_orm(column_name = "userUid", nullable)]
    pub user_uid: Option<Uuid>,
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
        belongs_to = "super::mission::Entity",
        from = "Column::MissionUid",
        to = "super::mission::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mission,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserUid",
        to = "super::user::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::community::Entity",
        from = "Column::CommunityUid",
        to = "super::community::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Community,
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
