use lingo_core::model::{Language, LanguageCode, Lesson, LessonId, LessonStatus, StarRating};
use services::ProgressionService;

/// `max` slots, the first `earned` of them filled.
#[must_use]
pub fn star_slots(earned: StarRating, max: u8) -> Vec<bool> {
    (0..max).map(|slot| slot < earned.value()).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub status: LessonStatus,
    pub stars: Vec<bool>,
}

impl LessonCardVm {
    /// Locked lessons ignore clicks; everything else (completed included) can be entered.
    #[must_use]
    pub fn can_enter(&self) -> bool {
        self.status != LessonStatus::Locked
    }

    #[must_use]
    pub fn shows_start(&self) -> bool {
        self.status == LessonStatus::Unlocked
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status {
            LessonStatus::Locked => "Locked",
            LessonStatus::Unlocked => "Open",
            LessonStatus::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn status_class(&self) -> &'static str {
        match self.status {
            LessonStatus::Locked => "lesson-card lesson-card--locked",
            LessonStatus::Unlocked => "lesson-card lesson-card--open",
            LessonStatus::Completed => "lesson-card lesson-card--completed",
        }
    }
}

impl From<&Lesson> for LessonCardVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            status: lesson.status(),
            stars: star_slots(lesson.stars(), lesson.max_stars()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonPathVm {
    pub language_name: String,
    pub flag: String,
    pub progress_label: String,
    pub progress_percent: f64,
    pub lessons: Vec<LessonCardVm>,
}

impl LessonPathVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

/// Languages missing from the catalog (custom content) fall back to their code.
#[must_use]
pub fn map_lesson_path(
    language: Option<&Language>,
    progression: &ProgressionService,
) -> LessonPathVm {
    let progress = progression.progress();
    let (language_name, flag) = language.map_or_else(
        || (fallback_name(progression.language()), String::new()),
        |language| (language.name().to_string(), language.flag().to_string()),
    );
    LessonPathVm {
        language_name,
        flag,
        progress_label: format!(
            "{} of {} lessons completed",
            progress.completed, progress.total
        ),
        progress_percent: progress.percent(),
        lessons: progression.lessons().iter().map(LessonCardVm::from).collect(),
    }
}

fn fallback_name(code: &LanguageCode) -> String {
    code.as_str().to_uppercase()
}
