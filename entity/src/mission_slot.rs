use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "missionSlots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "detailedDescription", column_type = "Text", nullable)]
    pub detailed_description: Option<String>,
    #[sea_orm(column_name = "orderNumber")]
    pub order_number: i32,
    #[sea_orm(column_name = "requiredDLCs")]
    pub required_dlcs: Json,
    #[sea_orm(column_name = "externalAssignee", nullable)]
    pub external_assignee: Option<String>,
    #[sea_orm(column_name = "slotGroupUid")]
    pub slot_group_uid: Uuid,
    #[sea_orm(column_name = "assigneeUid", nullable)]
    pub assignee_uid: Option<Uuid>,
    #[sea_orm(column_name = "restrictedCommunityUid", nullable)]
    pub restricted_community_uid: Option<Uuid>,
    pub blocked: bool,
    pub reserve: bool,
    #[sea_orm(column_name = "autoAssignable")]
    pub auto_assignable: bool,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mission_slot_group::Entity",
        from = "Column::SlotGroupUid",
        to = "super::mission_slot_group::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MissionSlotGroup,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssigneeUid",
        to = "super::user::Column::Uid",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Assignee,
    #[sea_orm(
        belongs_to = "super::community::Entity",
        from = "Column::RestrictedCommunityUid",
        to = "super::community::Column::Uid",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    RestrictedCommunity,
    #[sea_orm(has_many = "super::mission_slot_registration::Entity")]
    MissionSlotRegistration,
}

impl Related<super::mission_slot_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionSlotGroup.def()
    }
}

impl Related<super::mission_slot_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionSlotRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
