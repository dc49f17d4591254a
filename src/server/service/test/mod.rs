mod community;
mod import;
mod merge;
mod mission;
mod registration;
mod slot;
mod user;
