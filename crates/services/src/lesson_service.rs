use std::fmt;

use guide_core::model::{
    ExerciseStatus, Lesson, ProgressSettings, ProgressState, Section, SectionId,
};
use tracing::debug;

/// Output shown when a submission fails the exercise checklist.
pub const MISMATCH_MESSAGE: &str =
    "Your solution doesn't match the expected output. Try again!";

//
// ─── PROGRESS VIEW ─────────────────────────────────────────────────────────────
//

/// Aggregated view of lesson progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonProgress {
    pub percent_complete: u8,
    pub completed_exercises: usize,
    pub total_exercises: usize,
    pub is_complete: bool,
}

//
// ─── LESSON PROGRESS SERVICE ───────────────────────────────────────────────────
//

/// In-memory progress engine for one open lesson view.
///
/// Owns the learner's `ProgressState` for the lifetime of the view and maps
/// discrete user actions (section click, run click, mark complete) onto
/// state transitions. Holds no I/O; the completed-topics record is the
/// `TopicService`'s concern.
pub struct LessonProgressService {
    lesson: Lesson,
    settings: ProgressSettings,
    state: ProgressState,
}

impl LessonProgressService {
    /// Opens a lesson view, seeding fresh state from the static sections.
    ///
    /// `prior_percent` carries over progress the caller tracked from an
    /// earlier visit; without one the percent starts at the settings
    /// baseline.
    #[must_use]
    pub fn start(lesson: Lesson, settings: ProgressSettings, prior_percent: Option<u8>) -> Self {
        let state = ProgressState::for_lesson(&lesson, &settings, prior_percent);
        Self {
            lesson,
            settings,
            state,
        }
    }

    // Accessors
    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn settings(&self) -> &ProgressSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        self.state.percent_complete()
    }

    #[must_use]
    pub fn exercise_status(&self, id: &SectionId) -> ExerciseStatus {
        self.state.exercise_status(id)
    }

    #[must_use]
    pub fn user_code(&self, id: &SectionId) -> Option<&str> {
        self.state.user_code(id)
    }

    #[must_use]
    pub fn output(&self, id: &SectionId) -> Option<&str> {
        self.state.output(id)
    }

    /// Returns a summary of the current lesson progress.
    #[must_use]
    pub fn progress(&self) -> LessonProgress {
        LessonProgress {
            percent_complete: self.state.percent_complete(),
            completed_exercises: self.state.completed_exercises(),
            total_exercises: self.lesson.exercises().count(),
            is_complete: self.state.percent_complete() == 100,
        }
    }

    /// Highlights a section. The id is not validated; a stale id only
    /// affects highlighting, never correctness.
    pub fn set_active_section(&mut self, id: SectionId) {
        self.state.set_active_section(id);
    }

    /// Stores an edit to the learner's working copy without evaluating it.
    pub fn update_user_code(&mut self, id: SectionId, code: String) {
        self.state.set_user_code(id, code);
    }

    /// Handles a "run" click on a section and returns the output text.
    ///
    /// Code examples ignore the submission and reveal their fixed output.
    /// Exercises are checked against their token checklist: a full match
    /// completes the exercise and returns the canonical output sequence, a
    /// partial match returns [`MISMATCH_MESSAGE`] and leaves the exercise in
    /// progress. An id that addresses no section (or a narrative section) is
    /// a no-op returning an empty output. Never fails.
    pub fn evaluate(&mut self, id: &SectionId, submitted: &str) -> String {
        match self.lesson.section(id) {
            Some(Section::CodeExample(example)) => {
                // demonstrations are read-only: fixed output, no status change
                let output = example.expected_output.clone();
                self.state.set_output(id.clone(), output.clone());
                output
            }
            Some(Section::Exercise(exercise)) => {
                self.state.set_user_code(id.clone(), submitted.to_owned());

                let output = if exercise.checklist.is_satisfied_by(submitted) {
                    let transitioned = self
                        .state
                        .record_exercise_pass(id, self.settings.exercise_increment());
                    debug!(section = %id, transitioned, "exercise checklist passed");
                    exercise.canonical_output()
                } else {
                    self.state.record_exercise_fail(id);
                    debug!(
                        section = %id,
                        missing = exercise.checklist.unsatisfied_rules(submitted).len(),
                        "exercise checklist failed"
                    );
                    MISMATCH_MESSAGE.to_owned()
                };
                self.state.set_output(id.clone(), output.clone());
                output
            }
            Some(Section::Narrative(_)) | None => {
                debug!(section = %id, "evaluate ignored non-runnable section");
                String::new()
            }
        }
    }

    /// Forces the lesson to 100%, e.g. after the module quiz. Idempotent.
    pub fn mark_lesson_complete(&mut self) {
        self.state.mark_lesson_complete();
    }
}

impl fmt::Debug for LessonProgressService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonProgressService")
            .field("lesson_id", self.lesson.id())
            .field("percent_complete", &self.state.percent_complete())
            .field("active_section", self.state.active_section())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::samples;

    fn exercise_id() -> SectionId {
        SectionId::new("practice-exercise")
    }

    fn start_sample() -> LessonProgressService {
        LessonProgressService::start(
            samples::python_control_flow(),
            ProgressSettings::default(),
            None,
        )
    }

    #[test]
    fn starting_seeds_examples_and_starter_code() {
        let service = start_sample();

        assert_eq!(service.percent_complete(), 25);
        assert_eq!(
            service.output(&SectionId::new("code-example-2")),
            Some("You can drive")
        );
        let starter = service.user_code(&exercise_id()).unwrap();
        assert!(starter.starts_with("# Write your FizzBuzz solution here"));
        assert_eq!(
            service.exercise_status(&exercise_id()),
            ExerciseStatus::NotStarted
        );
    }

    #[test]
    fn reference_solution_completes_the_exercise() {
        let mut service = start_sample();
        let solution = service
            .lesson()
            .section(&exercise_id())
            .and_then(Section::as_exercise)
            .unwrap()
            .solution
            .clone();

        let output = service.evaluate(&exercise_id(), &solution);

        assert_eq!(
            service.exercise_status(&exercise_id()),
            ExerciseStatus::Completed
        );
        assert!(output.starts_with("1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz"));
        assert_eq!(output.lines().count(), 15);
        assert_eq!(service.percent_complete(), 35);
        assert_eq!(service.user_code(&exercise_id()), Some(solution.as_str()));
    }

    #[test]
    fn starter_code_stays_in_progress() {
        let mut service = start_sample();
        let starter = service.user_code(&exercise_id()).unwrap().to_owned();

        let output = service.evaluate(&exercise_id(), &starter);

        assert_eq!(output, MISMATCH_MESSAGE);
        assert_eq!(
            service.exercise_status(&exercise_id()),
            ExerciseStatus::InProgress
        );
        assert_eq!(service.percent_complete(), 25);
        assert_eq!(service.output(&exercise_id()), Some(MISMATCH_MESSAGE));
    }

    #[test]
    fn completed_is_sticky_and_earns_no_second_increment() {
        let mut service = start_sample();
        let solution = service
            .lesson()
            .exercises()
            .next()
            .unwrap()
            .solution
            .clone();

        service.evaluate(&exercise_id(), &solution);
        assert_eq!(service.percent_complete(), 35);

        // a later failing run keeps Completed and the earned percent
        let output = service.evaluate(&exercise_id(), "print('hello')");
        assert_eq!(output, MISMATCH_MESSAGE);
        assert_eq!(
            service.exercise_status(&exercise_id()),
            ExerciseStatus::Completed
        );
        assert_eq!(service.percent_complete(), 35);

        // re-running the solution does not double-count
        service.evaluate(&exercise_id(), &solution);
        assert_eq!(service.percent_complete(), 35);
    }

    #[test]
    fn code_examples_ignore_the_submission() {
        let mut service = start_sample();
        let id = SectionId::new("code-example-1");

        let output = service.evaluate(&id, "print('tampered')");

        assert_eq!(output, "The number is positive");
        // the stored example code is untouched
        assert!(service.user_code(&id).unwrap().starts_with("number = 42"));
        assert_eq!(service.percent_complete(), 25);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let mut service = start_sample();
        let before = service.state().clone();

        let output = service.evaluate(&SectionId::new("no-such-section"), "anything");

        assert_eq!(output, "");
        assert_eq!(service.state(), &before);
    }

    #[test]
    fn narrative_sections_are_not_runnable() {
        let mut service = start_sample();
        let before = service.state().clone();

        let output = service.evaluate(&SectionId::new("loops-intro"), "for i in range(3):");

        assert_eq!(output, "");
        assert_eq!(service.state(), &before);
    }

    #[test]
    fn percent_is_monotone_across_any_action_sequence() {
        let mut service = start_sample();
        let solution = service
            .lesson()
            .exercises()
            .next()
            .unwrap()
            .solution
            .clone();

        let mut last = service.percent_complete();
        let actions: Vec<(SectionId, String)> = vec![
            (exercise_id(), "wrong".into()),
            (SectionId::new("code-example-3"), String::new()),
            (exercise_id(), solution.clone()),
            (exercise_id(), "wrong again".into()),
            (SectionId::new("missing"), String::new()),
            (exercise_id(), solution),
        ];
        for (id, code) in actions {
            service.evaluate(&id, &code);
            let percent = service.percent_complete();
            assert!(percent >= last);
            assert!(percent <= 100);
            last = percent;
        }

        service.mark_lesson_complete();
        assert_eq!(service.percent_complete(), 100);
        service.mark_lesson_complete();
        assert_eq!(service.percent_complete(), 100);
    }

    #[test]
    fn set_active_section_does_not_validate() {
        let mut service = start_sample();
        service.set_active_section(SectionId::new("does-not-exist"));
        assert_eq!(
            service.state().active_section(),
            &SectionId::new("does-not-exist")
        );
    }

    #[test]
    fn progress_view_counts_exercises() {
        let mut service = start_sample();
        assert_eq!(
            service.progress(),
            LessonProgress {
                percent_complete: 25,
                completed_exercises: 0,
                total_exercises: 1,
                is_complete: false,
            }
        );

        let solution = service
            .lesson()
            .exercises()
            .next()
            .unwrap()
            .solution
            .clone();
        service.evaluate(&exercise_id(), &solution);
        service.mark_lesson_complete();

        let progress = service.progress();
        assert_eq!(progress.completed_exercises, 1);
        assert!(progress.is_complete);
    }
}
