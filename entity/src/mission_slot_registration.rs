use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "missionSlotRegistrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    #[sea_orm(column_name = "userUid")]
    pub user_uid: Uuid,
    #[sea_orm(column_name = "slotUid")]
    pub slot_uid: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserUid",
        to = "super::user::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::mission_slot::Entity",
        from = "Column::SlotUid",
        to = "super::mission_slot::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MissionSlot,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::mission_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
