use guide_core::model::CompletedTopics;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Storage contract for the completed-topics record.
///
/// The record is a single key holding a JSON array of topic-id strings; load
/// and save are synchronous because the payload is one tiny on-device value.
/// Injected into the services layer so the engine is testable without a real
/// backend.
pub trait CompletedTopicsStore: Send + Sync {
    /// Read the persisted set. A store with no record yet returns the empty
    /// set; only an unreadable or unparsable record is an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record exists but cannot be read or
    /// decoded.
    fn load(&self) -> Result<CompletedTopics, StorageError>;

    /// Persist the full set, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn save(&self, topics: &CompletedTopics) -> Result<(), StorageError>;
}

/// In-memory store for tests and prototyping.
///
/// Holds the raw serialized payload rather than the decoded set, so tests
/// can seed it with corrupt contents and observe decode failures.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with an arbitrary raw payload, valid or not.
    #[must_use]
    pub fn with_raw_contents(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw payload as last saved, if any.
    #[must_use]
    pub fn raw_contents(&self) -> Option<String> {
        self.raw.lock().map(|guard| guard.clone()).unwrap_or(None)
    }
}

impl CompletedTopicsStore for InMemoryStore {
    fn load(&self) -> Result<CompletedTopics, StorageError> {
        let guard = self
            .raw
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        match guard.as_deref() {
            None => Ok(CompletedTopics::new()),
            Some(raw) => {
                serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
            }
        }
    }

    fn save(&self, topics: &CompletedTopics) -> Result<(), StorageError> {
        let raw = serde_json::to_string(topics)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .raw
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }
}
