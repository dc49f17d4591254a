//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Foreign keys are
//! passed in explicitly, so callers build parents first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (mission, group, slot) =
//!         factory::helpers::create_mission_with_slot(&db, user.uid).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .nickname("Alpha 1-1")
//!     .steam_id("76561198000000001")
//!     .community(Some(community.uid))
//!     .build()
//!     .await?;
//! ```

pub mod community;
pub mod community_application;
pub mod helpers;
pub mod mission;
pub mod mission_access;
pub mod notification;
pub mod permission;
pub mod registration;
pub mod slot;
pub mod slot_group;
pub mod slot_template;
pub mod user;

pub use community::create_community;
pub use mission::create_mission;
pub use notification::create_notification;
pub use permission::create_permission;
pub use registration::create_registration;
pub use slot::create_slot;
pub use slot_group::create_slot_group;
pub use user::create_user;
