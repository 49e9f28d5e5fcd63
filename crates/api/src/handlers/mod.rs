//! Request handlers.
//!
//! CRUD handlers delegate to the repositories in `narratix_store` and map
//! errors via [`AppError`](crate::error::AppError). AI handlers answer the
//! `{ success, data | error }` envelope via
//! [`ServiceError`](crate::error::ServiceError).

pub mod auth;
pub mod chat;
pub mod content;
pub mod orchestration;
pub mod project;
pub mod script;
pub mod template;
pub mod vendor;
