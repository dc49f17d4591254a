//! Request authentication.
//!
//! [`auth::AuthToken`] pulls the bearer token off the request; [`auth::AuthGuard`]
//! resolves it to a user and enforces permissions inside the handlers.

pub mod auth;

#[cfg(test)]
mod test;
