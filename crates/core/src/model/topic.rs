use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::ids::TopicId;

/// The durable, append-only record of topics a learner has finished.
///
/// Serializes as a plain JSON array of topic-id strings, the single record
/// the storage layer persists. There is no unmark operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedTopics {
    topics: BTreeSet<TopicId>,
}

impl CompletedTopics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a topic id. Set semantics: inserting an existing id is a
    /// no-op. Returns true when the id was newly added.
    pub fn insert(&mut self, topic_id: TopicId) -> bool {
        self.topics.insert(topic_id)
    }

    #[must_use]
    pub fn contains(&self, topic_id: &TopicId) -> bool {
        self.topics.contains(topic_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicId> {
        self.topics.iter()
    }
}

impl FromIterator<TopicId> for CompletedTopics {
    fn from_iter<I: IntoIterator<Item = TopicId>>(iter: I) -> Self {
        Self {
            topics: iter.into_iter().collect(),
        }
    }
}
