use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::store::SessionStore;

/// Errors opening the store file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreOpenError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// File-backed store: the whole key-value map lives in one JSON snapshot,
/// a desktop stand-in for browser local storage.
///
/// Reads are served from memory; every mutation writes the snapshot through
/// to disk. A corrupt snapshot is treated as empty rather than surfaced.
pub struct JsonFileStore {
    path: PathBuf,
    cells: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreOpenError` if the directory cannot be created or an
    /// existing snapshot cannot be read. A missing or unparsable snapshot
    /// starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreOpenError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let cells = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            cells: Mutex::new(cells),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, cells: &BTreeMap<String, String>) {
        // Write-through; on a failed write the in-memory view stays
        // authoritative for the rest of this run.
        if let Ok(raw) = serde_json::to_string_pretty(cells) {
            let _ = fs::write(&self.path, raw);
        }
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.insert(key.to_string(), value.to_string());
        self.flush(&cells);
    }

    fn remove(&self, key: &str) {
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.remove(key);
        self.flush(&cells);
    }
}
