//! Repository for ad scripts.

use chrono::Utc;
use narratix_core::types::DbId;

use crate::models::script::{CreateScript, Script};
use crate::{MemStore, StoreError};

pub struct ScriptRepo;

impl ScriptRepo {
    pub async fn create(
        store: &MemStore,
        project_id: DbId,
        input: &CreateScript,
    ) -> Result<Script, StoreError> {
        let script = Script {
            id: store.next_id(),
            project_id,
            content: input.content.clone(),
            metadata: input.metadata.clone(),
            created_at: Utc::now(),
        };
        store
            .tables
            .write()
            .await
            .scripts
            .insert(script.id, script.clone());
        Ok(script)
    }

    /// Scripts belonging to `project_id`, in id order.
    pub async fn list_by_project(
        store: &MemStore,
        project_id: DbId,
    ) -> Result<Vec<Script>, StoreError> {
        let tables = store.tables.read().await;
        Ok(tables
            .scripts
            .values()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect())
    }
}
