//! Serde DTOs exchanged over the HTTP API.
//!
//! Field names are camelCase on the wire to stay compatible with existing slotlist
//! frontends. Every DTO derives `ToSchema` so it shows up in the OpenAPI document.

pub mod api;
pub mod auth;
pub mod community;
pub mod import;
pub mod mission;
pub mod notification;
pub mod permission;
pub mod registration;
pub mod slot;
pub mod slot_template;
pub mod status;
pub mod user;
