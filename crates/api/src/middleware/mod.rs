//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- the authenticated caller, from a JWT Bearer token.

pub mod auth;
