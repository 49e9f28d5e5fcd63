//! In-memory storage for users, projects, scripts, templates and sessions.
//!
//! Everything lives in process memory behind a single [`MemStore`]; a restart
//! starts from an empty store. Access goes through the zero-sized repository
//! structs in [`repositories`], each taking `&MemStore` as its first argument.

pub mod models;
pub mod repositories;
mod store;

pub use store::MemStore;

/// Shared handle to the store, cloned into every request handler.
pub type StoreHandle = std::sync::Arc<MemStore>;

/// Create an empty store handle.
pub fn create_store() -> StoreHandle {
    std::sync::Arc::new(MemStore::new())
}

/// Errors raised by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness rule was violated (e.g. a taken username).
    #[error("Conflict: {0}")]
    Conflict(String),
}
