use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use guide_core::model::CompletedTopics;
use tracing::debug;

use crate::repository::{CompletedTopicsStore, StorageError};

/// File-backed store: one file holding the JSON array of completed topic
/// ids. There is no versioning and no migration path; the format is the
/// array itself.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompletedTopicsStore for JsonFileStore {
    fn load(&self) -> Result<CompletedTopics, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // No record yet is the normal first-run state, not an error.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(CompletedTopics::new());
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn save(&self, topics: &CompletedTopics) -> Result<(), StorageError> {
        let raw = serde_json::to_string(topics)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }
        std::fs::write(&self.path, raw).map_err(|e| StorageError::Io(e.to_string()))?;
        debug!(path = %self.path.display(), count = topics.len(), "saved completed topics");
        Ok(())
    }
}
