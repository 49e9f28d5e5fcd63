//! Well-known role name constants.
//!
//! Self-registered accounts always receive [`ROLE_USER`].

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Whether `role` is one of the known role names.
pub fn is_known_role(role: &str) -> bool {
    matches!(role, ROLE_ADMIN | ROLE_USER)
}
