//! Key/value persistence for the view state.
//!
//! [`KeyValueStore`] is the capability boundary: an in-memory map for tests
//! and ephemeral sessions, a JSON file for real use. [`ViewStateStore`] sits
//! on top and never reports failure to its caller; storage is a convenience
//! cache, so unreadable or unwritable storage just means defaults.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::view_state::{PartialViewState, ViewState};

/// Key under which the view state is stored.
pub const STATE_KEY: &str = "app.state";

/// File name used by [`FileStore`] inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Storage contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("Storage is disabled")]
    Disabled,
}

pub type Result<T> = std::result::Result<T, StoreError>;

// ============================================================================
// Capability
// ============================================================================

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails, like disabled browser storage.
    pub fn disabled() -> Self {
        Self {
            entries: HashMap::new(),
            disabled: true,
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.disabled {
            return Err(StoreError::Disabled);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.disabled {
            return Err(StoreError::Disabled);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// FileStore
// ============================================================================

/// All keys live in one JSON object file: `{ "app.state": "{...}" }`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota_bytes: None,
        }
    }

    /// Store at `<data_dir>/storage.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_FILE))
    }

    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt storage file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        let serialized = serde_json::to_string_pretty(&entries)?;
        if let Some(limit) = self.quota_bytes {
            if serialized.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    needed: serialized.len(),
                    limit,
                });
            }
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Atomic replace via rename.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

// ============================================================================
// ViewStateStore
// ============================================================================

/// Best-effort view state persistence.
#[derive(Debug, Clone)]
pub struct ViewStateStore<S> {
    inner: S,
}

impl<S: KeyValueStore> ViewStateStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Whatever could be recovered; empty on missing or unreadable storage.
    pub fn load(&self) -> PartialViewState {
        match self.inner.get(STATE_KEY) {
            Ok(Some(raw)) => PartialViewState::from_json(&raw),
            Ok(None) => PartialViewState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read saved view state, using defaults");
                PartialViewState::default()
            }
        }
    }

    /// Write `state`; failures are logged and otherwise ignored.
    pub fn save(&mut self, state: &ViewState) {
        let result = state
            .to_json()
            .map_err(StoreError::from)
            .and_then(|json| self.inner.set(STATE_KEY, &json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "Could not save view state");
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}
