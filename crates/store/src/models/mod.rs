//! Record types and their creation DTOs.

pub mod project;
pub mod script;
pub mod session;
pub mod template;
pub mod user;
