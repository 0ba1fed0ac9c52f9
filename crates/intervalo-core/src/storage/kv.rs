//! Flat key-value store.
//!
//! The whole map is read once when the store is opened. Writes only touch
//! the in-memory copy until [`KeyValueStore::flush`] is called, which
//! replaces the file in one rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::data_dir;
use crate::error::{Result, StorageError};

/// Persistence seam for workout settings.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&Value>;
    fn set(&mut self, key: &str, value: Value);
    fn flush(&mut self) -> Result<()>;
}

/// JSON-object file store. Without a path it lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    path: Option<PathBuf>,
    data: BTreeMap<String, Value>,
    dirty: bool,
}

impl JsonStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open `store.json` in the data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(data_dir()?.join("store.json"))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => parse_map(&path, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::OpenFailed { path, source }.into()),
        };
        tracing::debug!(path = %path.display(), keys = data.len(), "store opened");
        Ok(Self {
            path: Some(path),
            data,
            dirty: false,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

fn parse_map(path: &Path, content: &str) -> Result<BTreeMap<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(other) => Err(StorageError::Corrupt {
            path: path.to_path_buf(),
            message: format!("expected a JSON object, found {other}"),
        }
        .into()),
        Err(e) => Err(StorageError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
        .into()),
    }
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        if self.data.get(key) != Some(&value) {
            self.data.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            self.dirty = false;
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }

        let content = serde_json::to_string_pretty(&self.data)?;
        let tmp = path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&tmp, &content)?;
            std::fs::rename(&tmp, path)
        };
        write().map_err(|source| StorageError::FlushFailed {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "store flushed");
        self.dirty = false;
        Ok(())
    }
}
