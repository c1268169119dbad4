//! Session record persistence.
//!
//! One serialized record under one fixed key — the demo's whole notion
//! of "being logged in". A malformed or unreadable record is treated as
//! absent (fails open): the caller stays logged out instead of crashing.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config;
use crate::models::Role;

// ═══════════════════════════════════════════════════════════
// SessionRecord
// ═══════════════════════════════════════════════════════════

/// The persisted "current user" record: a role plus optional profile
/// fields. Serialized shape: `{"type": "admin", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionRecord {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            display_name: None,
            email: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore
// ═══════════════════════════════════════════════════════════

/// Errors from session store writes. Reads never error: they fail open.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persistence seam for the session record.
pub trait SessionStore {
    /// Load the persisted record, if any. Absent or malformed data
    /// yields `None`, never an error.
    fn load(&self) -> Option<SessionRecord>;

    /// Persist the record, replacing any previous one.
    fn save(&mut self, record: &SessionRecord) -> Result<(), SessionStoreError>;

    /// Delete the persisted record. Deleting a missing record is not an
    /// error.
    fn clear(&mut self) -> Result<(), SessionStoreError>;
}

// ═══════════════════════════════════════════════════════════
// FileSessionStore — one JSON file under the fixed key
// ═══════════════════════════════════════════════════════════

/// File-backed store: a single JSON file in the app data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location, `config::session_file()`.
    pub fn at_default_location() -> Self {
        Self::new(config::session_file())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<SessionRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read session file {:?}: {e}", self.path);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding malformed session record: {e}");
                None
            }
        }
    }

    fn save(&mut self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// MemorySessionStore — for tests and embedding shells
// ═══════════════════════════════════════════════════════════

/// In-memory store. Clones share the record, so a test can keep a
/// handle while the controller owns the store.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    record: Arc<Mutex<Option<SessionRecord>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record, for inspection.
    pub fn current(&self) -> Option<SessionRecord> {
        self.record.lock().expect("session store lock").clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionRecord> {
        self.current()
    }

    fn save(&mut self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        *self.record.lock().expect("session store lock") = Some(record.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionStoreError> {
        *self.record.lock().expect("session store lock") = None;
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
