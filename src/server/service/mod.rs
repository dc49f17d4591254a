//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Slug uniqueness, order-number sequencing, DLC validation
//! - **Orchestration**: Coordinating repository calls with Steam and the legacy API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Reordering, registration confirmation, import and merge

pub mod auth;
pub mod community;
pub mod import;
pub mod merge;
pub mod mission;
pub mod notification;
pub mod permission;
pub mod registration;
pub mod slot;
pub mod slot_template;
pub mod steam;
pub mod user;

#[cfg(test)]
mod test;
