use std::sync::Arc;

use guide_core::model::{CompletedTopics, TopicId};
use storage::CompletedTopicsStore;
use tracing::warn;

use crate::error::TopicServiceError;

/// Cross-session topic completion over an injected store.
///
/// Marking a topic complete is append-only; there is no unmark operation.
#[derive(Clone)]
pub struct TopicService {
    store: Arc<dyn CompletedTopicsStore>,
}

impl TopicService {
    #[must_use]
    pub fn new(store: Arc<dyn CompletedTopicsStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted set, falling back to the empty set when the
    /// record is missing, unreadable or unparsable. Never fails: a learner
    /// with a corrupt record simply starts over.
    #[must_use]
    pub fn load_completed(&self) -> CompletedTopics {
        match self.store.load() {
            Ok(topics) => topics,
            Err(e) => {
                warn!(error = %e, "could not load completed topics, treating as empty");
                CompletedTopics::new()
            }
        }
    }

    #[must_use]
    pub fn is_completed(&self, topic_id: &TopicId) -> bool {
        self.load_completed().contains(topic_id)
    }

    /// Inserts the topic into the persisted set and returns the updated set.
    /// Idempotent: marking an already-completed topic rewrites the same set.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Storage` if the updated set cannot be
    /// written back.
    pub fn mark_complete(&self, topic_id: TopicId) -> Result<CompletedTopics, TopicServiceError> {
        let mut topics = self.load_completed();
        topics.insert(topic_id);
        self.store.save(&topics)?;
        Ok(topics)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
