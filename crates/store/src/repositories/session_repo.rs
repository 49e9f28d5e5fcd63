//! Repository for refresh-token sessions.

use chrono::Utc;
use narratix_core::types::DbId;

use crate::models::session::{CreateSession, Session};
use crate::{MemStore, StoreError};

pub struct SessionRepo;

impl SessionRepo {
    pub async fn create(store: &MemStore, input: &CreateSession) -> Result<Session, StoreError> {
        let session = Session {
            id: store.next_session_id(),
            user_id: input.user_id,
            refresh_token_hash: input.refresh_token_hash.clone(),
            expires_at: input.expires_at,
            revoked_at: None,
            created_at: Utc::now(),
        };
        store
            .tables
            .write()
            .await
            .sessions
            .insert(session.id, session.clone());
        Ok(session)
    }

    /// Find a non-revoked, non-expired session by refresh token hash.
    pub async fn find_active_by_hash(
        store: &MemStore,
        refresh_token_hash: &str,
    ) -> Result<Option<Session>, StoreError> {
        let now = Utc::now();
        let tables = store.tables.read().await;
        Ok(tables
            .sessions
            .values()
            .find(|s| s.refresh_token_hash == refresh_token_hash && s.is_active(now))
            .cloned())
    }

    /// Revoke one session. Returns `false` if it did not exist or was already revoked.
    pub async fn revoke(store: &MemStore, id: DbId) -> Result<bool, StoreError> {
        let mut tables = store.tables.write().await;
        match tables.sessions.get_mut(&id) {
            Some(session) if session.revoked_at.is_none() => {
                session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Revoke every open session of a user, returning how many were revoked.
    pub async fn revoke_all_for_user(store: &MemStore, user_id: DbId) -> Result<usize, StoreError> {
        let now = Utc::now();
        let mut tables = store.tables.write().await;
        let mut revoked = 0;
        for session in tables
            .sessions
            .values_mut()
            .filter(|s| s.user_id == user_id && s.revoked_at.is_none())
        {
            session.revoked_at = Some(now);
            revoked += 1;
        }
        Ok(revoked)
    }
}
