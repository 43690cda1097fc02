//! Session stores: a JSON-file-backed one for the desktop binary and an
//! in-memory one for tests and embedding.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "user": "{\"type\":\"Employee\",\"email\":\"employee@test.tld\"}",
//!   "jwt": "eyJhbGciOi..."
//! }
//! ```
//!
//! Values are strings, exactly as a browser's local storage holds them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::traits::SessionStore;
use crate::errors::SessionError;

pub struct FileSession {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSession {
    /// Load the session file, starting empty when it does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            info!(path = %path.display(), "session file not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "session written");
        Ok(())
    }
}

impl SessionStore for FileSession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }
}

#[derive(Default)]
pub struct MemorySession {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already holding a logged-in user
    pub fn with_user(user_type: &str, email: &str) -> Self {
        let session = Self::new();
        let user = serde_json::json!({ "type": user_type, "email": email });
        session.lock().insert("user".to_string(), user.to_string());
        session
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
