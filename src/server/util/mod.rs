//! Small pure helpers shared by services and controllers.

pub mod dlc;
pub mod json;
pub mod jwt;
pub mod permission;
pub mod slug;
pub mod tech_support;
