use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier (slug) for a Lesson
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(String);

/// Unique identifier (slug) for a Section within a lesson
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

/// Unique identifier (slug) for a Topic
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

/// Unique identifier for a quiz question
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

macro_rules! slug_id {
    ($name:ident) => {
        impl $name {
            /// Creates a new id from a slug string.
            #[must_use]
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Returns the underlying slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self::new(slug)
            }
        }
    };
}

slug_id!(LessonId);
slug_id!(SectionId);
slug_id!(TopicId);
slug_id!(QuestionId);
