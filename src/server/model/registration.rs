use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{model::registration::RegistrationDto, server::model::user::UserSummary};

/// A user's pending request for a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub uid: Uuid,
    pub slot_uid: Uuid,
    pub user: UserSummary,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn from_entity(
        entity: entity::mission_slot_registration::Model,
        user: entity::user::Model,
    ) -> Self {
        Self {
            uid: entity.uid,
            slot_uid: entity.slot_uid,
            user: UserSummary::from_entity(user),
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    /// Converts to the DTO; `confirmed` is only true in the response to a confirmation,
    /// since confirming removes the registration row.
    pub fn into_dto(self, confirmed: bool) -> RegistrationDto {
        RegistrationDto {
            uid: self.uid,
            slot_uid: self.slot_uid,
            user: self.user.into_dto(),
            comment: self.comment,
            confirmed,
            created_at: self.created_at,
        }
    }
}
