use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz must contain at least one question")]
    Empty,

    #[error("question {id} needs at least two options")]
    TooFewOptions { id: QuestionId },

    #[error("question {id} marks an unknown option '{option}' as correct")]
    UnknownCorrectOption { id: QuestionId, option: String },

    #[error("duplicate question id: {id}")]
    DuplicateQuestionId { id: QuestionId },
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One selectable answer for a quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

/// A single multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    id: QuestionId,
    prompt: String,
    options: Vec<QuizOption>,
    correct_option: String,
    explanation: String,
}

impl QuizQuestion {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::TooFewOptions` for fewer than two options and
    /// `QuizError::UnknownCorrectOption` if `correct_option` is not among
    /// the option ids.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<QuizOption>,
        correct_option: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions { id });
        }
        let correct_option = correct_option.into();
        if !options.iter().any(|option| option.id == correct_option) {
            return Err(QuizError::UnknownCorrectOption {
                id,
                option: correct_option,
            });
        }
        Ok(Self {
            id,
            prompt: prompt.into(),
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option == option_id
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A module quiz: an ordered list of multiple-choice questions.
///
/// `Quiz::new` is the only way to build one, so a quiz in hand is never
/// empty and never has duplicate question ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Creates a quiz from static question data.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty question list and
    /// `QuizError::DuplicateQuestionId` if two questions share an id.
    pub fn new(title: impl Into<String>, questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            if questions[..index].iter().any(|q| q.id() == question.id()) {
                return Err(QuizError::DuplicateQuestionId {
                    id: question.id().clone(),
                });
            }
        }
        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
