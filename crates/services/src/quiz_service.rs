use std::collections::HashMap;
use std::fmt;

use guide_core::model::{QuestionId, Quiz, QuizQuestion};

/// Result of scoring a quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u8,
}

/// One learner's pass through a module quiz.
///
/// Steps through questions one at a time; answers can be revised by paging
/// back. Scoring never consumes the attempt, so the review screen can show
/// results while the answers stay inspectable.
pub struct QuizAttempt {
    quiz: Quiz,
    current: usize,
    answers: HashMap<QuestionId, String>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            current: 0,
            answers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// 1-based position for "Question N of M" displays.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        // Quiz::new rejects empty quizzes and `current` stays in bounds.
        &self.quiz.questions()[self.current]
    }

    #[must_use]
    pub fn is_first_question(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.quiz.len()
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn answered_current(&self) -> bool {
        self.answers.contains_key(self.current_question().id())
    }

    /// Records (or revises) the answer for the current question.
    pub fn select_answer(&mut self, option_id: impl Into<String>) {
        let id = self.current_question().id().clone();
        self.answers.insert(id, option_id.into());
    }

    /// Advances to the next question. Returns false on the last question.
    pub fn next(&mut self) -> bool {
        if self.is_last_question() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Pages back to the previous question. Returns false on the first.
    pub fn previous(&mut self) -> bool {
        if self.is_first_question() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Scores the attempt as it stands; unanswered questions count as
    /// incorrect.
    #[must_use]
    pub fn score(&self) -> QuizScore {
        let total = self.quiz.len();
        let correct = self
            .quiz
            .questions()
            .iter()
            .filter(|question| {
                self.answers
                    .get(question.id())
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count();

        #[allow(clippy::cast_possible_truncation)]
        let percentage = ((correct * 100 + total / 2) / total) as u8;
        QuizScore {
            correct,
            total,
            percentage,
        }
    }
}

impl fmt::Debug for QuizAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizAttempt")
            .field("quiz", &self.quiz.title())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
