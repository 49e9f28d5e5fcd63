//! Repository for projects.

use chrono::Utc;
use narratix_core::types::DbId;

use crate::models::project::{CreateProject, Project};
use crate::{MemStore, StoreError};

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project owned by `user_id`. The owner is not checked.
    pub async fn create(
        store: &MemStore,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, StoreError> {
        let project = Project {
            id: store.next_id(),
            user_id,
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        store
            .tables
            .write()
            .await
            .projects
            .insert(project.id, project.clone());
        Ok(project)
    }

    pub async fn find_by_id(store: &MemStore, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(store.tables.read().await.projects.get(&id).cloned())
    }

    /// Projects owned by `user_id`, in id order.
    pub async fn list_by_user(store: &MemStore, user_id: DbId) -> Result<Vec<Project>, StoreError> {
        let tables = store.tables.read().await;
        Ok(tables
            .projects
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    pub async fn count(store: &MemStore) -> Result<usize, StoreError> {
        Ok(store.tables.read().await.projects.len())
    }
}
