//! Community factory for creating test community entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test communities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let community = CommunityFactory::new(&db)
///     .name("Task Force Alpha")
///     .slug("tfa")
///     .build()
///     .await?;
/// ```
pub struct CommunityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tag: String,
    slug: String,
    website: Option<String>,
}

impl<'a> CommunityFactory<'a> {
    /// Creates a new CommunityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Community {id}"`
    /// - tag: `"C{id}"`
    /// - slug: `"community-{id}"`
    /// - website: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Community {}", id),
            tag: format!("C{}", id),
            slug: format!("community-{}", id),
            website: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    /// Builds and inserts the community entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::community::Model)` - Created community entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::community::Model, DbErr> {
        let now = Utc::now();
        entity::community::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            tag: ActiveValue::Set(self.tag),
            slug: ActiveValue::Set(self.slug),
            website: ActiveValue::Set(self.website),
            logo_url: ActiveValue::Set(None),
            game_servers: ActiveValue::Set(serde_json::json!([])),
            voice_comms: ActiveValue::Set(serde_json::json!([])),
            repositories: ActiveValue::Set(serde_json::json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a community with default values.
pub async fn create_community(
    db: &DatabaseConnection,
) -> Result<entity::community::Model, DbErr> {
    CommunityFactory::new(db).build().await
}
