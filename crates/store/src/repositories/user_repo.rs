//! Repository for users.

use chrono::Utc;
use narratix_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::{MemStore, StoreError};

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. Usernames are unique (case-sensitive).
    pub async fn create(store: &MemStore, input: &CreateUser) -> Result<User, StoreError> {
        let mut tables = store.tables.write().await;
        if tables.users.values().any(|u| u.username == input.username) {
            return Err(StoreError::Conflict("Username already exists".into()));
        }

        let user = User {
            id: store.next_id(),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            role: input.role.clone(),
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        tracing::debug!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    pub async fn find_by_id(store: &MemStore, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(store.tables.read().await.users.get(&id).cloned())
    }

    pub async fn find_by_username(
        store: &MemStore,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        let tables = store.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    pub async fn count(store: &MemStore) -> Result<usize, StoreError> {
        Ok(store.tables.read().await.users.len())
    }
}
