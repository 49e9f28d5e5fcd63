//! Response envelope for the `/ai` routes.
//!
//! AI service routes answer `{ "success": true, "data": ... }` on success and
//! `{ "success": false, "error": "..." }` on failure (see
//! [`crate::error::ServiceError`]). CRUD routes return bare records.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
