use thiserror::Error;

use crate::model::{ChecklistError, LessonError, ProgressSettingsError, QuizError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Checklist(#[from] ChecklistError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    ProgressSettings(#[from] ProgressSettingsError),
}
