//! Video template record and DTOs.

use narratix_core::templates::TemplateSeed;
use narratix_core::types::DbId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    pub name: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub settings: Option<serde_json::Value>,
}

impl From<&TemplateSeed> for CreateTemplate {
    fn from(seed: &TemplateSeed) -> Self {
        Self {
            name: seed.name.to_string(),
            description: Some(seed.description.to_string()),
            thumbnail_url: Some(seed.thumbnail_url.to_string()),
            settings: Some(seed.settings.clone()),
        }
    }
}
