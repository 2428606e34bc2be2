//! Persistent state store abstraction
//!
//! Key-scoped read/write of JSON blobs to durable local storage. Writes
//! are best-effort and synchronous: the controller fires them after each
//! state transition and never awaits or retries. A failing backend
//! degrades the session to in-memory-only operation.

use crate::error::StoreError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Derive the persisted-state key for an application name.
/// The prefix keeps distinct books in one storage origin apart.
pub fn state_key(app_name: &str) -> String {
    format!("pwa-book-state-{app_name}")
}

/// Abstract key/value state store
pub trait StateStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Filesystem-backed store: one file per key under a root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    /// The directory is created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a key to a safe filename: anything outside
    /// `[A-Za-z0-9._-]` becomes an underscore, so keys can never
    /// escape the root directory.
    fn file_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl StateStore for FileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.file_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.file_path(key);

        // Write to a temp file then rename to avoid partial writes
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

/// In-memory store (tests, and the degraded fallback when no durable
/// backend is available)
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        Ok(data.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
