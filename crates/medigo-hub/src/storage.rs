//! Session store adapters.
//!
//! - `InMemorySessionStore` lives as long as its handles. Clones share the
//!   same map, so a second `AuthContext` over a clone sees what the first
//!   one wrote, the way a reloaded page sees the same browser session.
//! - `FileSessionStore` keeps one file per key in a directory so sessions
//!   survive across CLI invocations.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::NamedTempFile;
use tracing::debug;

use medigo_contracts::error::{HubError, HubResult};
use medigo_core::traits::SessionStore;

fn unavailable(reason: String) -> HubError {
    HubError::StorageUnavailable { reason }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> HubResult<MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|e| unavailable(format!("session map lock poisoned: {}", e)))
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> HubResult<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> HubResult<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> HubResult<()> {
        self.values()?.remove(key);
        Ok(())
    }
}

// ── File-backed ───────────────────────────────────────────────────────────────

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temporary file and a rename so a reader never sees a
/// half-written record.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> HubResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            unavailable(format!(
                "failed to create session directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> HubResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            && !key.starts_with('.');
        if !valid {
            return Err(unavailable(format!("invalid session key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> HubResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> HubResult<()> {
        let path = self.path_for(key)?;

        // Each write gets its own temp file in the target directory.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| {
            unavailable(format!(
                "failed to create temp file in '{}': {}",
                self.dir.display(),
                e
            ))
        })?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| unavailable(format!("failed to write session record: {}", e)))?;
        tmp.persist(&path).map_err(|e| {
            unavailable(format!(
                "failed to move session record into '{}': {}",
                path.display(),
                e.error
            ))
        })?;

        debug!(path = %path.display(), "session record written");
        Ok(())
    }

    fn remove(&self, key: &str) -> HubResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "session record removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable(format!(
                "failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
