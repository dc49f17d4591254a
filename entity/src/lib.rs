//! SeaORM entities for the slotlist schema.
//!
//! Table and column names follow the legacy schema (camelCase columns, plural
//! table names) so the same database can be shared with older deployments.

pub mod prelude;

pub mod community;
pub mod community_application;
pub mod mission;
pub mod mission_access;
pub mod mission_slot;
pub mod mission_slot_group;
pub mod mission_slot_registration;
pub mod mission_slot_template;
pub mod notification;
pub mod permission;
pub mod user;
