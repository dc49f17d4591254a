use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Community, User};
///
/// let test = TestBuilder::new()
///     .with_table(Community)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for users and their permissions.
    ///
    /// Adds in dependency order:
    /// - Community
    /// - User
    /// - Permission
    pub fn with_user_tables(self) -> Self {
        self.with_table(Community)
            .with_table(User)
            .with_table(Permission)
    }

    /// Adds every table of the slotlist schema in dependency order.
    ///
    /// Use this for service tests that touch missions, slots, registrations and
    /// notifications at once.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_slotlist_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_slotlist_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Mission)
            .with_table(MissionSlotGroup)
            .with_table(MissionSlot)
            .with_table(MissionSlotRegistration)
            .with_table(MissionSlotTemplate)
            .with_table(MissionAccess)
            .with_table(CommunityApplication)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
