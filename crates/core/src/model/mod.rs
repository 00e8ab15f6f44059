mod checklist;
mod ids;
mod lesson;
mod progress;
mod quiz;
mod topic;

pub use checklist::{Checklist, ChecklistError, TokenRule};
pub use ids::{LessonId, QuestionId, SectionId, TopicId};
pub use lesson::{CodeExample, Exercise, Lesson, LessonError, Narrative, Section};
pub use progress::{ExerciseStatus, ProgressSettings, ProgressSettingsError, ProgressState};
pub use quiz::{Quiz, QuizError, QuizOption, QuizQuestion};
pub use topic::CompletedTopics;
