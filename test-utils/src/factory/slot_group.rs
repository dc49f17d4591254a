//! Slot group factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test slot groups.
pub struct SlotGroupFactory<'a> {
    db: &'a DatabaseConnection,
    mission_uid: Uuid,
    title: String,
    order_number: i32,
}

impl<'a> SlotGroupFactory<'a> {
    /// Defaults to title `"Group {id}"` and order number 1.
    pub fn new(db: &'a DatabaseConnection, mission_uid: Uuid) -> Self {
        Self {
            db,
            mission_uid,
            title: format!("Group {}", next_id()),
            order_number: 1,
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

    pub async fn build(self) -> Result<entity::mission_slot_group::Model, DbErr> {
        let now = Utc::now();
        entity::mission_slot_group::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            order_number: ActiveValue::Set(self.order_number),
            mission_uid: ActiveValue::Set(self.mission_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates the first slot group of a mission.
pub async fn create_slot_group(
    db: &DatabaseConnection,
    mission_uid: Uuid,
) -> Result<entity::mission_slot_group::Model, DbErr> {
    SlotGroupFactory::new(db, mission_uid).build().await
}
