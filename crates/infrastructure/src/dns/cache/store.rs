//! Durable backing for the answer cache.
//!
//! The whole cache is one JSON object keyed by normalized name:
//!
//! ```json
//! { "www.example.com": [["93.184.216.34", 300, 1700000000]] }
//! ```
//!
//! It is read once at startup and rewritten wholesale on every update.

use ferrous_recursor_domain::{CachedAnswer, DomainError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub type CacheSnapshot = BTreeMap<String, Vec<CachedAnswer>>;

pub trait CacheStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError>;

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError>;
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl CacheStore for JsonFileStore {
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Cache store not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(DomainError::CacheStoreUnreadable(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        let snapshot: CacheSnapshot = serde_json::from_str(&contents).map_err(|e| {
            DomainError::CacheStoreUnreadable(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), names = snapshot.len(), "Cache store loaded");
        Ok(Some(snapshot))
    }

    /// Writes to a sibling temp file and renames it over the store, so a
    /// crash mid-write leaves the previous contents intact.
    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| DomainError::CacheStoreWrite(e.to_string()))?;

        let temp = self.temp_path();
        std::fs::write(&temp, json).map_err(|e| {
            DomainError::CacheStoreWrite(format!("{}: {}", temp.display(), e))
        })?;
        std::fs::rename(&temp, &self.path).map_err(|e| {
            DomainError::CacheStoreWrite(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
