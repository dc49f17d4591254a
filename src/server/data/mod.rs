//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table (plus the lookups needed to hydrate
//! its domain model) and convert entity models into domain models at this boundary.
//! They are generic over `ConnectionTrait` so services can run several of them inside
//! one transaction.

pub mod community;
pub mod community_application;
pub mod mission;
pub mod mission_access;
pub mod notification;
pub mod permission;
pub mod registration;
pub mod slot;
pub mod slot_group;
pub mod slot_template;
pub mod user;

#[cfg(test)]
mod test;
