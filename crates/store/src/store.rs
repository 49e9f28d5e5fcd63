use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use narratix_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::project::Project;
use crate::models::script::Script;
use crate::models::session::Session;
use crate::models::template::Template;
use crate::models::user::User;

/// Collections keyed by id. `BTreeMap` keeps listings in id order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: BTreeMap<DbId, User>,
    pub projects: BTreeMap<DbId, Project>,
    pub scripts: BTreeMap<DbId, Script>,
    pub templates: BTreeMap<DbId, Template>,
    pub sessions: BTreeMap<DbId, Session>,
}

/// Process-lifetime store.
///
/// Users, projects, scripts and templates draw ids from one shared sequence,
/// so an id is unique across those collections. Sessions count separately.
#[derive(Debug)]
pub struct MemStore {
    pub(crate) tables: RwLock<Tables>,
    next_id: AtomicI64,
    next_session_id: AtomicI64,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            next_id: AtomicI64::new(1),
            next_session_id: AtomicI64::new(1),
        }
    }

    pub(crate) fn next_id(&self) -> DbId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn next_session_id(&self) -> DbId {
        self.next_session_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}
