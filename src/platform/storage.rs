// MedConnect - platform/storage.rs
//
// Durable key/value store used for favorites.
//
// - `FileStore` keeps every key in one JSON object file in the platform data
//   directory. Writes are atomic (write temp, rename) so a crash during save
//   never corrupts the previous good file.
// - Load errors are discarded: a corrupt or unreadable file starts empty.
// - `MemoryStore` is the non-persistent variant (tests, --no-persist).

use crate::util::constants::STORAGE_FILE_NAME;
use crate::util::error::StorageError;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// String key/value store with synchronous writes.
pub trait KeyValueStore: Send {
    /// Serialised value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. Returns once the write is durable.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

// =============================================================================
// In-memory store
// =============================================================================

/// Volatile store; contents are lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

// =============================================================================
// File-backed store
// =============================================================================

/// Resolve the storage file path from the platform data directory.
pub fn storage_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORAGE_FILE_NAME)
}

/// JSON-file store. The whole map is rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading any existing contents.
    ///
    /// Never fails: a missing file is a normal first run and a malformed one
    /// is logged and treated as empty.
    pub fn open(path: PathBuf) -> Self {
        let values = load_map(&path).unwrap_or_default();
        tracing::debug!(path = %path.display(), keys = values.len(), "Storage opened");
        Self { path, values }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|e| {
            StorageError::Serialize {
                key: "*".to_string(),
                source: e,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| StorageError::Io {
            path: tmp.clone(),
            operation: "write",
            source: e,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            StorageError::Io {
                path: self.path.clone(),
                operation: "rename",
                source: e,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Storage saved");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

fn load_map(path: &Path) -> Option<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read storage file");
            }
        })
        .ok()?;

    serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Storage file is malformed, starting empty"
            );
        })
        .ok()
}
