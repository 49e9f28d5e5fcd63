//! Ad script record and DTOs.

use narratix_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: DbId,
    pub project_id: DbId,
    pub content: String,
    /// Free-form JSON; generated scripts keep their generation brief here.
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScript {
    pub content: String,
    pub metadata: Option<serde_json::Value>,
}
