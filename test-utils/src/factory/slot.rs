//! Slot factory for creating test mission slots.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test slots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let slot = SlotFactory::new(&db, group.uid)
///     .order_number(2)
///     .assignee(Some(user.uid))
///     .build()
///     .await?;
/// ```
pub struct SlotFactory<'a> {
    db: &'a DatabaseConnection,
    slot_group_uid: Uuid,
    title: String,
    order_number: i32,
    assignee_uid: Option<Uuid>,
    external_assignee: Option<String>,
    restricted_community_uid: Option<Uuid>,
    blocked: bool,
}

impl<'a> SlotFactory<'a> {
    /// Creates a new SlotFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Slot {id}"`
    /// - order_number: `1`
    /// - unassigned, unrestricted and not blocked
    pub fn new(db: &'a DatabaseConnection, slot_group_uid: Uuid) -> Self {
        Self {
            db,
            slot_group_uid,
            title: format!("Slot {}", next_id()),
            order_number: 1,
            assignee_uid: None,
            external_assignee: None,
            restricted_community_uid: None,
            blocked: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn order_number(mut self, order_number: i32) -> Self {
        self.order_number = order_number;
        self
    }

    pub fn assignee(mut self, assignee_uid: Option<Uuid>) -> Self {
        self.assignee_uid = assignee_uid;
        self
    }

    pub fn external_assignee(mut self, external_assignee: Option<String>) -> Self {
        self.external_assignee = external_assignee;
        self
    }

    pub fn restricted_community(mut self, community_uid: Option<Uuid>) -> Self {
        self.restricted_community_uid = community_uid;
        self
    }

    pub fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Builds and inserts the slot entity into the database.
    pub async fn build(self) -> Result<entity::mission_slot::Model, DbErr> {
        let now = Utc::now();
        entity::mission_slot::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            detailed_description: ActiveValue::Set(None),
            order_number: ActiveValue::Set(self.order_number),
            required_dlcs: ActiveValue::Set(serde_json::json!([])),
            external_assignee: ActiveValue::Set(self.external_assignee),
            slot_group_uid: ActiveValue::Set(self.slot_group_uid),
            assignee_uid: ActiveValue::Set(self.assignee_uid),
            restricted_community_uid: ActiveValue::Set(self.restricted_community_uid),
            blocked: ActiveValue::Set(self.blocked),
            reserve: ActiveValue::Set(false),
            auto_assignable: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open slot in the given group.
pub async fn create_slot(
    db: &DatabaseConnection,
    slot_group_uid: Uuid,
) -> Result<entity::mission_slot::Model, DbErr> {
    SlotFactory::new(db, slot_group_uid).build().await
}
