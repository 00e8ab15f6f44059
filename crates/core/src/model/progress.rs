use std::collections::HashMap;
use thiserror::Error;

use crate::model::ids::SectionId;
use crate::model::lesson::{Lesson, Section};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressSettingsError {
    #[error("baseline percent must be <= 100")]
    BaselineOutOfRange,

    #[error("exercise increment must be between 1 and 100")]
    InvalidIncrement,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunables for lesson progress accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSettings {
    baseline_percent: u8,
    exercise_increment: u8,
}

impl ProgressSettings {
    /// Creates custom progress settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the baseline exceeds 100 or the increment is not
    /// in `1..=100`.
    pub fn new(baseline_percent: u8, exercise_increment: u8) -> Result<Self, ProgressSettingsError> {
        if baseline_percent > 100 {
            return Err(ProgressSettingsError::BaselineOutOfRange);
        }
        if exercise_increment == 0 || exercise_increment > 100 {
            return Err(ProgressSettingsError::InvalidIncrement);
        }
        Ok(Self {
            baseline_percent,
            exercise_increment,
        })
    }

    #[must_use]
    pub fn baseline_percent(&self) -> u8 {
        self.baseline_percent
    }

    #[must_use]
    pub fn exercise_increment(&self) -> u8 {
        self.exercise_increment
    }
}

impl Default for ProgressSettings {
    /// A lesson opens at 25% (earlier sections already read) and each solved
    /// exercise is worth 10 points.
    fn default() -> Self {
        Self {
            baseline_percent: 25,
            exercise_increment: 10,
        }
    }
}

//
// ─── EXERCISE STATUS ───────────────────────────────────────────────────────────
//

/// Lifecycle of one interactive exercise within a session.
///
/// `Completed` is terminal: a later failing evaluation keeps the status at
/// `Completed` rather than reverting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExerciseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

//
// ─── PROGRESS STATE ────────────────────────────────────────────────────────────
//

/// In-memory learner state for one open lesson view.
///
/// Seeded from the lesson's static sections, mutated by user interaction,
/// discarded when the view closes. The percent is monotonically
/// non-decreasing and always within `0..=100`; those invariants are enforced
/// here so no caller can violate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    percent_complete: u8,
    active_section: SectionId,
    statuses: HashMap<SectionId, ExerciseStatus>,
    user_code: HashMap<SectionId, String>,
    outputs: HashMap<SectionId, String>,
}

impl ProgressState {
    /// Seeds fresh state for a lesson view.
    ///
    /// Each code example contributes its fixed code and output; each exercise
    /// contributes its starter code and a `NotStarted` status. The percent
    /// starts from `prior_percent` when the caller carries one over, else
    /// from the settings baseline.
    #[must_use]
    pub fn for_lesson(
        lesson: &Lesson,
        settings: &ProgressSettings,
        prior_percent: Option<u8>,
    ) -> Self {
        let mut statuses = HashMap::new();
        let mut user_code = HashMap::new();
        let mut outputs = HashMap::new();

        for section in lesson.sections() {
            match section {
                Section::CodeExample(example) => {
                    user_code.insert(example.id.clone(), example.code.clone());
                    outputs.insert(example.id.clone(), example.expected_output.clone());
                }
                Section::Exercise(exercise) => {
                    user_code.insert(exercise.id.clone(), exercise.starter_code.clone());
                    statuses.insert(exercise.id.clone(), ExerciseStatus::NotStarted);
                }
                Section::Narrative(_) => {}
            }
        }

        Self {
            percent_complete: prior_percent
                .unwrap_or_else(|| settings.baseline_percent())
                .min(100),
            active_section: lesson.first_section_id().clone(),
            statuses,
            user_code,
            outputs,
        }
    }

    // Accessors
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        self.percent_complete
    }

    #[must_use]
    pub fn active_section(&self) -> &SectionId {
        &self.active_section
    }

    /// Status for an exercise; unknown ids read as `NotStarted`.
    #[must_use]
    pub fn exercise_status(&self, id: &SectionId) -> ExerciseStatus {
        self.statuses.get(id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn user_code(&self, id: &SectionId) -> Option<&str> {
        self.user_code.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn output(&self, id: &SectionId) -> Option<&str> {
        self.outputs.get(id).map(String::as_str)
    }

    /// Number of exercises currently `Completed`.
    #[must_use]
    pub fn completed_exercises(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| **status == ExerciseStatus::Completed)
            .count()
    }

    // Mutators
    /// Highlight a section. The id is not validated against the lesson; a
    /// stale id only affects highlighting.
    pub fn set_active_section(&mut self, id: SectionId) {
        self.active_section = id;
    }

    pub fn set_user_code(&mut self, id: SectionId, code: String) {
        self.user_code.insert(id, code);
    }

    pub fn set_output(&mut self, id: SectionId, output: String) {
        self.outputs.insert(id, output);
    }

    /// Records a passing evaluation.
    ///
    /// Returns true when this call transitioned the exercise into
    /// `Completed`; only that transition earns the percent increment.
    pub fn record_exercise_pass(&mut self, id: &SectionId, increment: u8) -> bool {
        if self.exercise_status(id) == ExerciseStatus::Completed {
            return false;
        }
        self.statuses.insert(id.clone(), ExerciseStatus::Completed);
        self.percent_complete = self.percent_complete.saturating_add(increment).min(100);
        true
    }

    /// Records a failing evaluation. `Completed` is sticky; anything else
    /// becomes `InProgress` (never back to `NotStarted`).
    pub fn record_exercise_fail(&mut self, id: &SectionId) {
        if self.exercise_status(id) == ExerciseStatus::Completed {
            return;
        }
        self.statuses.insert(id.clone(), ExerciseStatus::InProgress);
    }

    /// Forces the lesson to 100%. Idempotent.
    pub fn mark_lesson_complete(&mut self) {
        self.percent_complete = 100;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    fn seeded_state() -> ProgressState {
        let lesson = samples::python_control_flow();
        ProgressState::for_lesson(&lesson, &ProgressSettings::default(), None)
    }

    #[test]
    fn settings_validate_bounds() {
        assert_eq!(
            ProgressSettings::new(101, 10).unwrap_err(),
            ProgressSettingsError::BaselineOutOfRange
        );
        assert_eq!(
            ProgressSettings::new(25, 0).unwrap_err(),
            ProgressSettingsError::InvalidIncrement
        );
        let settings = ProgressSettings::new(0, 100).unwrap();
        assert_eq!(settings.baseline_percent(), 0);
        assert_eq!(settings.exercise_increment(), 100);
    }

    #[test]
    fn state_seeds_examples_and_exercises() {
        let lesson = samples::python_control_flow();
        let state = seeded_state();

        for section in lesson.sections() {
            match section {
                Section::CodeExample(example) => {
                    assert_eq!(state.user_code(&example.id), Some(example.code.as_str()));
                    assert_eq!(
                        state.output(&example.id),
                        Some(example.expected_output.as_str())
                    );
                }
                Section::Exercise(exercise) => {
                    assert_eq!(
                        state.user_code(&exercise.id),
                        Some(exercise.starter_code.as_str())
                    );
                    assert_eq!(
                        state.exercise_status(&exercise.id),
                        ExerciseStatus::NotStarted
                    );
                }
                Section::Narrative(narrative) => {
                    assert!(state.user_code(&narrative.id).is_none());
                }
            }
        }

        assert_eq!(state.percent_complete(), 25);
        assert_eq!(state.active_section(), lesson.first_section_id());
    }

    #[test]
    fn prior_percent_overrides_baseline_and_clamps() {
        let lesson = samples::python_control_flow();
        let settings = ProgressSettings::default();

        let state = ProgressState::for_lesson(&lesson, &settings, Some(60));
        assert_eq!(state.percent_complete(), 60);

        let state = ProgressState::for_lesson(&lesson, &settings, Some(250));
        assert_eq!(state.percent_complete(), 100);
    }

    #[test]
    fn pass_increments_once_and_clamps() {
        let mut state = seeded_state();
        let id = SectionId::new("practice-exercise");

        assert!(state.record_exercise_pass(&id, 10));
        assert_eq!(state.percent_complete(), 35);
        assert_eq!(state.exercise_status(&id), ExerciseStatus::Completed);

        // already completed: no second increment
        assert!(!state.record_exercise_pass(&id, 10));
        assert_eq!(state.percent_complete(), 35);

        let other = SectionId::new("another-exercise");
        assert!(state.record_exercise_pass(&other, 100));
        assert_eq!(state.percent_complete(), 100);
    }

    #[test]
    fn fail_moves_to_in_progress_but_never_reverts_completed() {
        let mut state = seeded_state();
        let id = SectionId::new("practice-exercise");

        state.record_exercise_fail(&id);
        assert_eq!(state.exercise_status(&id), ExerciseStatus::InProgress);

        state.record_exercise_fail(&id);
        assert_eq!(state.exercise_status(&id), ExerciseStatus::InProgress);

        state.record_exercise_pass(&id, 10);
        state.record_exercise_fail(&id);
        assert_eq!(state.exercise_status(&id), ExerciseStatus::Completed);
    }

    #[test]
    fn mark_lesson_complete_is_idempotent() {
        let mut state = seeded_state();
        state.mark_lesson_complete();
        assert_eq!(state.percent_complete(), 100);
        state.mark_lesson_complete();
        assert_eq!(state.percent_complete(), 100);
    }
}
