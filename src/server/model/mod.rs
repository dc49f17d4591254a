//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. `*Params` types carry validated
//! operation input from controllers into services.

pub mod community;
pub mod import;
pub mod mission;
pub mod notification;
pub mod page;
pub mod permission;
pub mod registration;
pub mod slot;
pub mod slot_template;
pub mod user;
