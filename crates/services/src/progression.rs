use content::ContentSource;
use lingo_core::model::{
    CompletionOutcome, LanguageCode, Lesson, LessonCompletion, LessonId, LessonRoster,
    RosterProgress,
};
use tracing::{debug, info, warn};

use crate::exercise::ExerciseSession;

/// Lesson path of one language for the current run of the app.
///
/// Sole owner of the lesson roster and of the "active lesson" pointer. Exercises
/// report back through [`ProgressionService::on_exercise_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionService {
    language: LanguageCode,
    roster: LessonRoster,
    active: Option<LessonId>,
}

impl ProgressionService {
    /// Build a fresh roster for `language` from the content source.
    ///
    /// Unknown languages produce an empty roster.
    #[must_use]
    pub fn start(source: &dyn ContentSource, language: LanguageCode) -> Self {
        let lessons = source
            .lessons(&language)
            .into_iter()
            .map(|content| content.lesson().clone());
        let roster = LessonRoster::new(lessons);
        if roster.is_empty() {
            warn!(%language, "no lessons available for language");
        } else {
            debug!(%language, lessons = roster.len(), "lesson path started");
        }
        Self::from_roster(language, roster)
    }

    #[must_use]
    pub fn from_roster(language: LanguageCode, roster: LessonRoster) -> Self {
        Self {
            language,
            roster,
            active: None,
        }
    }

    #[must_use]
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    #[must_use]
    pub fn roster(&self) -> &LessonRoster {
        &self.roster
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        self.roster.lessons()
    }

    #[must_use]
    pub fn progress(&self) -> RosterProgress {
        self.roster.progress()
    }

    #[must_use]
    pub fn active_lesson_id(&self) -> Option<LessonId> {
        self.active
    }

    /// Make `id` the active lesson.
    ///
    /// Locked and unknown lessons are ignored; returns whether the lesson became active.
    pub fn select_lesson(&mut self, id: LessonId) -> bool {
        if !self.roster.is_selectable(id) {
            debug!(language = %self.language, lesson_id = %id, "locked lesson not selectable");
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Start an exercise for the active lesson, if there is one.
    #[must_use]
    pub fn begin_exercise(&self, source: &dyn ContentSource) -> Option<ExerciseSession> {
        let id = self.active?;
        let questions = source.questions(&self.language, id);
        if questions.is_empty() {
            warn!(language = %self.language, lesson_id = %id, "lesson has no questions");
        }
        Some(ExerciseSession::new(id, questions))
    }

    /// Record a finished exercise and return to the lesson path.
    ///
    /// Completes the lesson and unlocks the next one in a single step.
    pub fn on_exercise_complete(&mut self, event: LessonCompletion) -> CompletionOutcome {
        let outcome = self.roster.apply_completion(event);
        match outcome {
            CompletionOutcome::Applied { unlocked } => info!(
                language = %self.language,
                lesson_id = %event.lesson_id,
                stars = event.stars.value(),
                unlocked = ?unlocked,
                "lesson completed"
            ),
            CompletionOutcome::Ignored => debug!(
                language = %self.language,
                lesson_id = %event.lesson_id,
                "completion for locked or unknown lesson ignored"
            ),
        }
        self.active = None;
        outcome
    }

    /// Back out of the active exercise without recording anything.
    pub fn leave_exercise(&mut self) {
        self.active = None;
    }
}
