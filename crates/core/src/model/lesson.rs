use thiserror::Error;

use crate::model::ids::LessonId;
use crate::model::stars::StarRating;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Where a lesson sits in its `Locked -> Unlocked -> Completed` lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Locked,
    Unlocked,
    Completed,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A lesson entry on the learning path, with its unlock/completion/star state.
///
/// State is only changed through `LessonRoster`; outside the model crate a lesson is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    completed: bool,
    locked: bool,
    stars: StarRating,
}

impl Lesson {
    /// Create a fresh, locked, not-completed lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` if the title is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            completed: false,
            locked: true,
            stars: StarRating::ZERO,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn stars(&self) -> StarRating {
        self.stars
    }

    #[must_use]
    pub fn max_stars(&self) -> u8 {
        StarRating::MAX
    }

    #[must_use]
    pub fn status(&self) -> LessonStatus {
        if self.locked {
            LessonStatus::Locked
        } else if self.completed {
            LessonStatus::Completed
        } else {
            LessonStatus::Unlocked
        }
    }

    pub(crate) fn reset(&mut self) {
        self.completed = false;
        self.locked = true;
        self.stars = StarRating::ZERO;
    }

    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }

    pub(crate) fn complete(&mut self, stars: StarRating) {
        self.completed = true;
        self.stars = stars;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lesson_starts_locked_without_stars() {
        let lesson = Lesson::new(LessonId::new(1), "Greetings", "Say hello").unwrap();
        assert!(lesson.is_locked());
        assert!(!lesson.is_completed());
        assert_eq!(lesson.stars(), StarRating::ZERO);
        assert_eq!(lesson.max_stars(), 3);
        assert_eq!(lesson.status(), LessonStatus::Locked);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            Lesson::new(LessonId::new(1), "  ", "x"),
            Err(LessonError::EmptyTitle)
        );
    }

    #[test]
    fn status_follows_flags() {
        let mut lesson = Lesson::new(LessonId::new(1), "Greetings", "").unwrap();
        lesson.unlock();
        assert_eq!(lesson.status(), LessonStatus::Unlocked);
        lesson.complete(StarRating::new(2).unwrap());
        assert_eq!(lesson.status(), LessonStatus::Completed);
        assert_eq!(lesson.stars().value(), 2);
    }
}
