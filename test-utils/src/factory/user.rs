//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .nickname("Alpha 1-1")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    steam_id: String,
    community_uid: Option<Uuid>,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - nickname: `"User {id}"` where id is auto-incremented
    /// - steam_id: `"7656119{id:010}"`
    /// - community_uid: `None`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("User {}", id),
            steam_id: format!("7656119{:010}", id),
            community_uid: None,
            active: true,
        }
    }

    /// Sets the nickname for the user.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the Steam ID for the user.
    ///
    /// Use an `imported_` prefix to simulate a user created by the legacy import.
    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    /// Sets the community the user belongs to.
    pub fn community(mut self, community_uid: Option<Uuid>) -> Self {
        self.community_uid = community_uid;
        self
    }

    /// Sets whether the account is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            nickname: ActiveValue::Set(self.nickname),
            steam_id: ActiveValue::Set(self.steam_id),
            community_uid: ActiveValue::Set(self.community_uid),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
