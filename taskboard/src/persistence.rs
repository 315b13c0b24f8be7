//! Snapshot persistence.
//!
//! The store hands a [`PersistedState`] to its [`Persistence`] after every
//! committed mutation and asks for one back when it opens.

use crate::error::{BoardError, Result};
use crate::types::AppState;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage name written into every snapshot
pub const STORAGE_KEY: &str = "taskboard-storage";

/// Snapshot schema version this build reads and writes
pub const SCHEMA_VERSION: u32 = 1;

/// A versioned, named snapshot of the whole application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub name: String,
    pub version: u32,
    pub state: AppState,
}

impl PersistedState {
    /// Wrap `state` under `name` at the current schema version
    pub fn new(name: impl Into<String>, state: AppState) -> Self {
        Self {
            name: name.into(),
            version: SCHEMA_VERSION,
            state,
        }
    }

    /// Unwrap the state after checking name and version.
    ///
    /// The loading flag is transient and always comes back cleared.
    pub fn into_state(self, expected_name: &str) -> Result<AppState> {
        if self.name != expected_name {
            return Err(BoardError::StorageMismatch {
                expected: expected_name.to_string(),
                found: self.name,
            });
        }
        if self.version > SCHEMA_VERSION {
            return Err(BoardError::UnsupportedSchema {
                found: self.version,
                supported: SCHEMA_VERSION,
            });
        }
        let mut state = self.state;
        state.is_loading = false;
        Ok(state)
    }
}

/// Where snapshots go
pub trait Persistence: Send + Sync {
    /// Store the latest snapshot, replacing the previous one
    fn save(&self, snapshot: &PersistedState) -> Result<()>;

    /// The last saved snapshot, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<PersistedState>>;
}

/// Keeps the last snapshot in memory
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    slot: Mutex<Option<PersistedState>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out holding `snapshot`
    pub fn with_snapshot(snapshot: PersistedState) -> Self {
        Self {
            slot: Mutex::new(Some(snapshot)),
        }
    }
}

impl Persistence for MemoryPersistence {
    fn save(&self, snapshot: &PersistedState) -> Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }
}

/// Stores the snapshot as pretty JSON in a single file.
///
/// Writes go to a temp file that is renamed over the target while holding an
/// exclusive lock on a sibling `.lock` file. A second writer gets `LockBusy`.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Try to acquire the exclusive write lock (non-blocking)
    pub fn lock(&self) -> Result<StorageLock> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StorageLock { file }),
            Err(_) => Err(BoardError::LockBusy),
        }
    }
}

impl Persistence for JsonFilePersistence {
    fn save(&self, snapshot: &PersistedState) -> Result<()> {
        let _lock = self.lock()?;
        let json = serde_json::to_string_pretty(snapshot)?;
        atomic_write(&self.path, json.as_bytes())?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "saved snapshot");
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

/// RAII lock guard - releases on drop
pub struct StorageLock {
    file: fs::File,
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)?;

    Ok(())
}
