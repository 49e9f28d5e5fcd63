//! Domain types and pure logic shared by the NarratixAI crates.
//!
//! Nothing in here performs I/O: prompt text, vendor request shaping,
//! service-type parsing and input validators all live here so the store,
//! provider clients and HTTP layer agree on them.

pub mod error;
pub mod prompts;
pub mod roles;
pub mod service;
pub mod templates;
pub mod types;
pub mod validation;
pub mod vendor;
