use crate::model::ids::LessonId;
use crate::model::stars::StarRating;

/// Emitted once by a finished exercise and consumed by the lesson roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonCompletion {
    pub lesson_id: LessonId,
    pub stars: StarRating,
}

impl LessonCompletion {
    #[must_use]
    pub fn new(lesson_id: LessonId, stars: StarRating) -> Self {
        Self { lesson_id, stars }
    }
}
