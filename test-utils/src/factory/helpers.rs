//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

/// Counter for generating unique names and slugs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a mission with one slot group holding one slot.
///
/// # Arguments
/// - `db` - Database connection
/// - `creator_uid` - UID of the user owning the mission
///
/// # Returns
/// - `Ok((mission, slot_group, slot))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mission_with_slot(
    db: &DatabaseConnection,
    creator_uid: Uuid,
) -> Result<
    (
        entity::mission::Model,
        entity::mission_slot_group::Model,
        entity::mission_slot::Model,
    ),
    DbErr,
> {
    let mission = crate::factory::mission::create_mission(db, creator_uid).await?;
    let group = crate::factory::slot_group::create_slot_group(db, mission.uid).await?;
    let slot = crate::factory::slot::create_slot(db, group.uid).await?;

    Ok((mission, group, slot))
}
