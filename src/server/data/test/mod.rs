mod community;
mod community_application;
mod mission;
mod mission_access;
mod notification;
mod permission;
mod registration;
mod slot;
mod slot_group;
mod slot_template;
mod user;
