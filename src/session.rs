//! Last-viewed persistence
//!
//! The viewer remembers exactly two strings between runs: the lesson file
//! last opened under Reading & Writing and the slug of the math unit last
//! opened. They live in a small TOML file managed by `confy`.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "satview";

/// Key holding the last opened lesson file
pub const RW_LAST: &str = "rw:last";

/// Key holding the last opened math unit slug
pub const MATH_LAST: &str = "math:last";

/// A string key-value store that outlives the process
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// On-disk layout of the state file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub last_viewed: BTreeMap<String, String>,
}

/// State file backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: SessionState,
}

impl FileStore {
    /// Default state file location for this user
    pub fn default_path() -> Result<PathBuf, StoreError> {
        confy::get_configuration_file_path(APP_NAME, None).map_err(StoreError::Location)
    }

    /// Open the state file at `path`, creating it if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = confy::load_path(&path).map_err(|source| StoreError::Load {
            path: path.clone(),
            source,
        })?;
        Ok(FileStore { path, state })
    }

    /// Open the state file, starting empty if it cannot be read
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, "starting with empty session state");
                FileStore {
                    path,
                    state: SessionState::default(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        confy::store_path(&self.path, &self.state).map_err(|source| StoreError::Store {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.last_viewed.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.state
            .last_viewed
            .insert(key.to_string(), value.to_string());
        self.save()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.state.last_viewed.clear();
        self.save()
    }
}

/// Open the session store for this run
///
/// An explicit `--state-file` wins; otherwise `locate` supplies the default
/// path. When no location can be found the selections are kept in memory
/// for this run only.
pub fn open_store(
    state_file: Option<PathBuf>,
    locate: impl FnOnce() -> Result<PathBuf, StoreError>,
) -> Box<dyn SessionStore> {
    let path = match state_file.map(Ok).unwrap_or_else(locate) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %e, "no state file location, selections will not persist");
            return Box::new(MemoryStore::new());
        }
    };
    let store = FileStore::open_or_empty(path);
    tracing::info!(state = %store.path().display(), "session state");
    Box::new(store)
}

/// In-process store, forgotten on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}
