use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "missionSlotGroups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "orderNumber")]
    pub order_number: i32,
    #[sea_orm(column_name = "missionUid")]
    pub mission_uid: Uuid,
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
    #[sea_orm(has_many = "super::mission_slot::Entity")]
    MissionSlot,
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl Related<super::mission_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
