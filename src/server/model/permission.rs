use uuid::Uuid;

use crate::{
    model::permission::{GrantedPermissionDto, PermissionDto},
    server::model::user::UserSummary,
};

/// A single stored permission string.
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub uid: Uuid,
    pub user_uid: Uuid,
    pub permission: String,
}

impl Permission {
    pub fn from_entity(entity: entity::permission::Model) -> Self {
        Self {
            uid: entity.uid,
            user_uid: entity.user_uid,
            permission: entity.permission,
        }
    }

    pub fn into_dto(self) -> PermissionDto {
        PermissionDto {
            uid: self.uid,
            permission: self.permission,
        }
    }
}

/// Permission together with the user holding it, as listed on community and mission
/// permission endpoints.
#[derive(Debug, Clone)]
pub struct GrantedPermission {
    pub uid: Uuid,
    pub permission: String,
    pub user: UserSummary,
}

impl GrantedPermission {
    pub fn from_entity(entity: entity::permission::Model, user: entity::user::Model) -> Self {
        Self {
            uid: entity.uid,
            permission: entity.permission,
            user: UserSummary::from_entity(user),
        }
    }

    pub fn into_dto(self) -> GrantedPermissionDto {
        GrantedPermissionDto {
            uid: self.uid,
            permission: self.permission,
            user: self.user.into_dto(),
        }
    }
}
