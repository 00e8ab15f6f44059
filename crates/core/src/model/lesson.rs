use thiserror::Error;

use crate::model::checklist::Checklist;
use crate::model::ids::{LessonId, SectionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson must contain at least one section")]
    NoSections,

    #[error("duplicate section id: {id}")]
    DuplicateSectionId { id: SectionId },
}

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

/// Markdown-ish prose section. The body is opaque to the engine; rendering
/// it is the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub id: SectionId,
    pub title: String,
    pub body: String,
}

/// A read-only code demonstration with its fixed output.
///
/// The code is never executed; running a code example just reveals
/// `expected_output` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExample {
    pub id: SectionId,
    pub title: String,
    pub code: String,
    pub expected_output: String,
}

/// An interactive exercise the learner edits and "runs".
///
/// Submissions are approved by `checklist`, not by execution. The canonical
/// output shown on success is `expected_output` joined line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: SectionId,
    pub title: String,
    pub instructions: String,
    pub starter_code: String,
    pub solution: String,
    pub hints: Vec<String>,
    pub checklist: Checklist,
    pub expected_output: Vec<String>,
}

impl Exercise {
    /// The output sequence shown when the checklist passes.
    #[must_use]
    pub fn canonical_output(&self) -> String {
        self.expected_output.join("\n")
    }
}

/// One displayable unit within a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Narrative(Narrative),
    CodeExample(CodeExample),
    Exercise(Exercise),
}

impl Section {
    #[must_use]
    pub fn id(&self) -> &SectionId {
        match self {
            Section::Narrative(section) => &section.id,
            Section::CodeExample(section) => &section.id,
            Section::Exercise(section) => &section.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Section::Narrative(section) => &section.title,
            Section::CodeExample(section) => &section.title,
            Section::Exercise(section) => &section.title,
        }
    }

    #[must_use]
    pub fn as_code_example(&self) -> Option<&CodeExample> {
        match self {
            Section::CodeExample(section) => Some(section),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_exercise(&self) -> Option<&Exercise> {
        match self {
            Section::Exercise(section) => Some(section),
            _ => None,
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// An ordered sequence of content and exercise sections under one topic.
///
/// Lessons are immutable static configuration; all mutable learner state
/// lives in `ProgressState`. `Lesson::new` is the only way to build one, so
/// the constructor invariants (non-empty, unique section ids) always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: Option<String>,
    estimated_minutes: u32,
    sections: Vec<Section>,
}

impl Lesson {
    /// Creates a new lesson from static section data.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` if the title is empty or
    /// whitespace-only, `LessonError::NoSections` if `sections` is empty, and
    /// `LessonError::DuplicateSectionId` if two sections share an id.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: Option<String>,
        estimated_minutes: u32,
        sections: Vec<Section>,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        if sections.is_empty() {
            return Err(LessonError::NoSections);
        }
        for (index, section) in sections.iter().enumerate() {
            if sections[..index].iter().any(|s| s.id() == section.id()) {
                return Err(LessonError::DuplicateSectionId {
                    id: section.id().clone(),
                });
            }
        }

        let description = description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description,
            estimated_minutes,
            sections,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The id of the first section, used as the initial highlight.
    #[must_use]
    pub fn first_section_id(&self) -> &SectionId {
        self.sections[0].id()
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id() == id)
    }

    /// Iterates over the interactive exercises in section order.
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.sections.iter().filter_map(Section::as_exercise)
    }

    /// Case-insensitive search over section titles and narrative bodies.
    ///
    /// Mirrors the sidebar filter: an empty query matches every section.
    #[must_use]
    pub fn sections_matching(&self, query: &str) -> Vec<&Section> {
        let query = query.to_lowercase();
        self.sections
            .iter()
            .filter(|section| {
                if query.is_empty() {
                    return true;
                }
                if section.title().to_lowercase().contains(&query) {
                    return true;
                }
                match section {
                    Section::Narrative(narrative) => {
                        narrative.body.to_lowercase().contains(&query)
                    }
                    _ => false,
                }
            })
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
