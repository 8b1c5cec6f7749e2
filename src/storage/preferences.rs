//! Persisted user preferences.
//!
//! A small keyed JSON store kept in `preferences.json` under the user data
//! directory. Reads fall back to defaults; every write goes straight to disk.

use crate::constants::{APP_DIR_NAME, DARK_MODE_KEY, PREFERENCES_FILE_NAME};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize preference '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: Map<String, Value>,
}

impl PreferenceStore {
    /// Open the store backed by `path`.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// is logged and also yields an empty store; it is replaced on the next write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    log::warn!("Ignoring preferences in {}: expected an object, got {}", path.display(), other);
                    Map::new()
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable preferences in {}: {}", path.display(), e);
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                log::warn!("Failed to read preferences from {}: {}", path.display(), e);
                Map::new()
            }
        };

        Self {
            path: Some(path),
            values,
        }
    }

    /// Open the store at its default location
    pub fn open_default() -> Result<Self, PreferenceError> {
        Ok(Self::open(Self::default_path()?))
    }

    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: Map::new(),
        }
    }

    pub fn default_path() -> Result<PathBuf, PreferenceError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
            .ok_or(PreferenceError::NoDataDir)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read a value; `None` when absent or of the wrong shape
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?.clone();
        match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring preference '{}': {}", key, e);
                None
            }
        }
    }

    /// Store a value and write the whole store to disk
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), PreferenceError> {
        let value = serde_json::to_value(value).map_err(|source| PreferenceError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    /// Theme flag; light (`false`) unless a dark preference was saved
    pub fn load_dark_mode(&self) -> bool {
        self.get::<bool>(DARK_MODE_KEY).unwrap_or(false)
    }

    pub fn persist_dark_mode(&mut self, dark_mode: bool) -> Result<(), PreferenceError> {
        self.set(DARK_MODE_KEY, dark_mode)
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let io_err = |source| PreferenceError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(&self.values).map_err(|source| PreferenceError::Serialize {
            key: String::new(),
            source,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content).map_err(io_err)?;
        std::fs::rename(&tmp_path, path).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_round_trips_without_disk() {
        let mut store = PreferenceStore::in_memory();
        assert!(!store.load_dark_mode());
        store.persist_dark_mode(true).unwrap();
        assert!(store.load_dark_mode());
        assert!(store.path().is_none());
    }

    #[test]
    fn wrong_shape_reads_as_absent() {
        let mut store = PreferenceStore::in_memory();
        store.set(DARK_MODE_KEY, "yes").unwrap();
        assert_eq!(store.get::<bool>(DARK_MODE_KEY), None);
        assert!(!store.load_dark_mode());
    }
}
