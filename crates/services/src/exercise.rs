use lingo_core::model::{LessonCompletion, LessonId, Question, StarRating, score_percent};
use tracing::debug;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Where an exercise currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExercisePhase {
    /// The lesson has no questions; nothing to show and nothing to report.
    Empty,
    /// Waiting for an answer to the current question.
    Answering,
    /// The current answer was judged and feedback is visible.
    Feedback,
    /// All questions answered; the result is available.
    Finished,
}

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoQuestions,
    NoAnswer,
    FeedbackShown,
    FeedbackHidden,
    Finished,
    NotAnOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Judged { correct: bool },
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the question at `index`.
    Next { index: usize },
    Finished(ExerciseResult),
    Rejected(Rejection),
}

/// Final score of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseResult {
    pub lesson_id: LessonId,
    pub correct: usize,
    pub total: usize,
    pub stars: StarRating,
}

impl ExerciseResult {
    /// Accuracy rounded to a whole percent; `0` when there were no questions.
    #[must_use]
    pub fn percent(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        score_percent(self.correct, self.total).map_or(0, |pct| pct.round() as u32)
    }

    #[must_use]
    pub fn completion(&self) -> LessonCompletion {
        LessonCompletion::new(self.lesson_id, self.stars)
    }
}

/// 1-based position within the exercise, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseProgress {
    pub position: usize,
    pub total: usize,
}

impl ExerciseProgress {
    #[must_use]
    pub fn percent(&self) -> f64 {
        score_percent(self.position, self.total).unwrap_or(0.0)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a lesson's questions.
///
/// Owns all transient state of the run. It never touches lesson records; when the
/// last question is passed it yields a single [`LessonCompletion`] for the caller to
/// apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSession {
    lesson_id: LessonId,
    questions: Vec<Question>,
    current: usize,
    draft: String,
    is_correct: bool,
    show_feedback: bool,
    correct_count: usize,
    finished: bool,
    completion_taken: bool,
}

impl ExerciseSession {
    #[must_use]
    pub fn new(lesson_id: LessonId, questions: Vec<Question>) -> Self {
        Self {
            lesson_id,
            questions,
            current: 0,
            draft: String::new(),
            is_correct: false,
            show_feedback: false,
            correct_count: 0,
            finished: false,
            completion_taken: false,
        }
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.lesson_id
    }

    #[must_use]
    pub fn phase(&self) -> ExercisePhase {
        if self.questions.is_empty() {
            ExercisePhase::Empty
        } else if self.finished {
            ExercisePhase::Finished
        } else if self.show_feedback {
            ExercisePhase::Feedback
        } else {
            ExercisePhase::Answering
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question being answered, or `None` once finished or when there are none.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn is_feedback_visible(&self) -> bool {
        self.show_feedback
    }

    /// Whether the last submitted answer was right, while its feedback is shown.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.show_feedback.then_some(self.is_correct)
    }

    /// Submitting is possible once something has been entered and not yet judged.
    ///
    /// Whitespace counts as an entry; it is judged like any other answer.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase() == ExercisePhase::Answering && !self.draft.is_empty()
    }

    #[must_use]
    pub fn progress(&self) -> ExerciseProgress {
        let total = self.questions.len();
        ExerciseProgress {
            position: (self.current + 1).min(total),
            total,
        }
    }

    /// Replace the draft answer (typing into a translation field).
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` and leaves the draft alone unless a question is
    /// waiting for an answer.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<(), Rejection> {
        self.ensure_answering()?;
        self.draft = text.into();
        Ok(())
    }

    /// Pick one of the current multiple-choice options as the draft.
    ///
    /// # Errors
    ///
    /// Returns `Rejection::NotAnOption` for text the current question does not offer.
    pub fn choose_option(&mut self, option: &str) -> Result<(), Rejection> {
        self.ensure_answering()?;
        let offered = self
            .current_question()
            .is_some_and(|question| question.options().iter().any(|o| o == option));
        if !offered {
            return Err(Rejection::NotAnOption);
        }
        self.draft = option.to_string();
        Ok(())
    }

    /// Judge the draft against the current question.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Err(reason) = self.ensure_answering() {
            debug!(lesson_id = %self.lesson_id, ?reason, "submit ignored");
            return SubmitOutcome::Rejected(reason);
        }
        if self.draft.is_empty() {
            debug!(lesson_id = %self.lesson_id, "submit ignored: no answer");
            return SubmitOutcome::Rejected(Rejection::NoAnswer);
        }
        let Some(question) = self.questions.get(self.current) else {
            return SubmitOutcome::Rejected(Rejection::NoQuestions);
        };

        let correct = question.accepts(&self.draft);
        self.is_correct = correct;
        self.show_feedback = true;
        if correct {
            self.correct_count += 1;
        }
        debug!(
            lesson_id = %self.lesson_id,
            index = self.current,
            correct,
            "answer judged"
        );
        SubmitOutcome::Judged { correct }
    }

    /// Leave the feedback of the current question.
    ///
    /// Moves to the next question, or finishes the exercise after the last one.
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.phase() {
            ExercisePhase::Feedback => {}
            ExercisePhase::Answering => return AdvanceOutcome::Rejected(Rejection::FeedbackHidden),
            ExercisePhase::Empty => return AdvanceOutcome::Rejected(Rejection::NoQuestions),
            ExercisePhase::Finished => return AdvanceOutcome::Rejected(Rejection::Finished),
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.draft.clear();
            self.show_feedback = false;
            self.is_correct = false;
            return AdvanceOutcome::Next {
                index: self.current,
            };
        }

        self.finished = true;
        let result = self.score();
        debug!(
            lesson_id = %self.lesson_id,
            correct = result.correct,
            total = result.total,
            stars = result.stars.value(),
            "exercise finished"
        );
        AdvanceOutcome::Finished(result)
    }

    /// The final score, once finished.
    #[must_use]
    pub fn result(&self) -> Option<ExerciseResult> {
        self.finished.then(|| self.score())
    }

    /// Hand out the completion event. Yields `Some` exactly once, after finishing.
    pub fn take_completion(&mut self) -> Option<LessonCompletion> {
        if !self.finished || self.completion_taken {
            return None;
        }
        self.completion_taken = true;
        self.result().map(|result| result.completion())
    }

    fn score(&self) -> ExerciseResult {
        ExerciseResult {
            lesson_id: self.lesson_id,
            correct: self.correct_count,
            total: self.questions.len(),
            stars: StarRating::from_score(self.correct_count, self.questions.len()),
        }
    }

    fn ensure_answering(&self) -> Result<(), Rejection> {
        match self.phase() {
            ExercisePhase::Answering => Ok(()),
            ExercisePhase::Feedback => Err(Rejection::FeedbackShown),
            ExercisePhase::Empty => Err(Rejection::NoQuestions),
            ExercisePhase::Finished => Err(Rejection::Finished),
        }
    }
}
