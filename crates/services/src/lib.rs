#![forbid(unsafe_code)]

pub mod error;
pub mod lesson_service;
pub mod quiz_service;
pub mod topic_service;

pub use error::TopicServiceError;
pub use lesson_service::{LessonProgress, LessonProgressService, MISMATCH_MESSAGE};
pub use quiz_service::{QuizAttempt, QuizScore};
pub use topic_service::TopicService;
