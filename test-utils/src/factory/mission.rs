//! Mission factory for creating test mission entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test missions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let mission = MissionFactory::new(&db, user.uid)
///     .slug("op-thunder")
///     .visibility("public")
///     .community(Some(community.uid))
///     .build()
///     .await?;
/// ```
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    creator_uid: Uuid,
    slug: String,
    title: String,
    visibility: String,
    start_time: DateTime<Utc>,
    community_uid: Option<Uuid>,
    tech_support: Option<String>,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"mission-{id}"`
    /// - title: `"Mission {id}"`
    /// - visibility: `"public"`
    /// - start_time: 1 day from now, end time 3 hours after start
    /// - community_uid: `None`
    pub fn new(db: &'a DatabaseConnection, creator_uid: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            creator_uid,
            slug: format!("mission-{}", id),
            title: format!("Mission {}", id),
            visibility: "public".to_string(),
            start_time: Utc::now() + Duration::days(1),
            community_uid: None,
            tech_support: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Sets the start time; briefing, slotting and end times follow it.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn community(mut self, community_uid: Option<Uuid>) -> Self {
        self.community_uid = community_uid;
        self
    }

    pub fn tech_support(mut self, tech_support: Option<String>) -> Self {
        self.tech_support = tech_support;
        self
    }

    /// Builds and inserts the mission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - Created mission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        let now = Utc::now();
        entity::mission::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            short_description: ActiveValue::Set("Short description".to_string()),
            detailed_description: ActiveValue::Set("Detailed description".to_string()),
            collapsed_description: ActiveValue::Set(None),
            briefing_time: ActiveValue::Set(self.start_time - Duration::hours(1)),
            slotting_time: ActiveValue::Set(self.start_time - Duration::minutes(30)),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + Duration::hours(3)),
            visibility: ActiveValue::Set(self.visibility),
            tech_support: ActiveValue::Set(self.tech_support),
            rules: ActiveValue::Set(None),
            details_map: ActiveValue::Set(Some("Altis".to_string())),
            details_game_mode: ActiveValue::Set(Some("coop".to_string())),
            required_dlcs: ActiveValue::Set(serde_json::json!([])),
            banner_image_url: ActiveValue::Set(None),
            game_server: ActiveValue::Set(None),
            voice_comms: ActiveValue::Set(None),
            repositories: ActiveValue::Set(serde_json::json!([])),
            mission_token: ActiveValue::Set(None),
            creator_uid: ActiveValue::Set(self.creator_uid),
            community_uid: ActiveValue::Set(self.community_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public mission starting tomorrow.
pub async fn create_mission(
    db: &DatabaseConnection,
    creator_uid: Uuid,
) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db, creator_uid).build().await
}
