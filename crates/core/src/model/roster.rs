use crate::model::completion::LessonCompletion;
use crate::model::ids::LessonId;
use crate::model::lesson::Lesson;

/// What a completion event did to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The lesson was marked completed. `unlocked` names the lesson it opened, if any.
    Applied { unlocked: Option<LessonId> },
    /// The event named a lesson that is missing or still locked.
    Ignored,
}

/// Completed vs. total lessons, derived from the roster on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterProgress {
    pub completed: usize,
    pub total: usize,
}

impl RosterProgress {
    /// Completion percentage; `0.0` for an empty roster.
    #[must_use]
    pub fn percent(&self) -> f64 {
        crate::model::stars::score_percent(self.completed, self.total).unwrap_or(0.0)
    }
}

/// Ordered lessons of one language and their lock/completion state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonRoster {
    lessons: Vec<Lesson>,
}

impl LessonRoster {
    /// Build a roster in ascending id order.
    ///
    /// The lesson with the lowest id starts unlocked; every other lesson starts locked,
    /// regardless of the state the inputs carried.
    #[must_use]
    pub fn new(lessons: impl IntoIterator<Item = Lesson>) -> Self {
        let mut lessons: Vec<Lesson> = lessons
            .into_iter()
            .map(|mut lesson| {
                lesson.reset();
                lesson
            })
            .collect();
        lessons.sort_by_key(Lesson::id);
        lessons.dedup_by_key(|lesson| lesson.id());
        if let Some(first) = lessons.first_mut() {
            first.unlock();
        }
        Self { lessons }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn get(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// A lesson can be entered when it exists and is not locked.
    #[must_use]
    pub fn is_selectable(&self, id: LessonId) -> bool {
        self.get(id).is_some_and(|lesson| !lesson.is_locked())
    }

    #[must_use]
    pub fn progress(&self) -> RosterProgress {
        RosterProgress {
            completed: self.lessons.iter().filter(|l| l.is_completed()).count(),
            total: self.lessons.len(),
        }
    }

    /// Apply a completion event in place.
    ///
    /// Marks the lesson completed with the event's stars (last result wins) and unlocks
    /// the lesson whose id is one higher, whatever the star count.
    pub fn apply_completion(&mut self, event: LessonCompletion) -> CompletionOutcome {
        let Some(lesson) = self
            .lessons
            .iter_mut()
            .find(|lesson| lesson.id() == event.lesson_id)
        else {
            return CompletionOutcome::Ignored;
        };
        if lesson.is_locked() {
            return CompletionOutcome::Ignored;
        }
        lesson.complete(event.stars);

        let unlocked = event.lesson_id.next().and_then(|next_id| {
            let next = self.lessons.iter_mut().find(|lesson| lesson.id() == next_id)?;
            next.unlock();
            Some(next_id)
        });

        CompletionOutcome::Applied { unlocked }
    }

    /// Pure form of [`LessonRoster::apply_completion`].
    #[must_use]
    pub fn with_completion(mut self, event: LessonCompletion) -> Self {
        self.apply_completion(event);
        self
    }
}
