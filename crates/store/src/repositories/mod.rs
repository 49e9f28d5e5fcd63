//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&MemStore` as the first argument.

pub mod project_repo;
pub mod script_repo;
pub mod session_repo;
pub mod template_repo;
pub mod user_repo;

pub use project_repo::ProjectRepo;
pub use script_repo::ScriptRepo;
pub use session_repo::SessionRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
