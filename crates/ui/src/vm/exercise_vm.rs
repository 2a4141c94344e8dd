use lingo_core::model::LessonCompletion;
use services::{AdvanceOutcome, ExercisePhase, ExerciseSession, SubmitOutcome};
use tracing::debug;

use crate::vm::result_vm::ResultVm;

/// Everything the exercise screen can ask of its session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseIntent {
    Choose(String),
    Type(String),
    Check,
    Continue,
    Finish,
    Back,
}

/// What the host view has to do after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseEffect {
    Stay,
    /// Abandon the exercise; nothing is recorded.
    Leave,
    Complete(LessonCompletion),
}

/// Apply one intent. Intents that do not fit the current phase leave the session as is.
pub fn apply_intent(session: &mut ExerciseSession, intent: ExerciseIntent) -> ExerciseEffect {
    match intent {
        ExerciseIntent::Choose(option) => {
            if let Err(reason) = session.choose_option(&option) {
                debug!(?reason, "option ignored");
            }
        }
        ExerciseIntent::Type(text) => {
            if let Err(reason) = session.set_draft(text) {
                debug!(?reason, "typing ignored");
            }
        }
        ExerciseIntent::Check => {
            if let SubmitOutcome::Rejected(reason) = session.submit() {
                debug!(?reason, "check ignored");
            }
        }
        ExerciseIntent::Continue => {
            if let AdvanceOutcome::Rejected(reason) = session.advance() {
                debug!(?reason, "continue ignored");
            }
        }
        ExerciseIntent::Finish => {
            if let Some(completion) = session.take_completion() {
                return ExerciseEffect::Complete(completion);
            }
        }
        ExerciseIntent::Back => return ExerciseEffect::Leave,
    }
    ExerciseEffect::Stay
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerVm {
    Choice(Vec<OptionVm>),
    Text { draft: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub title: &'static str,
    /// Only set for wrong answers.
    pub correct_answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionVm {
    Check { enabled: bool },
    Continue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub counter_label: String,
    pub progress_percent: f64,
    pub prompt: String,
    pub hint: Option<String>,
    pub answer: AnswerVm,
    pub locked: bool,
    pub feedback: Option<FeedbackVm>,
    pub action: ActionVm,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExerciseScreenVm {
    Empty,
    Question(QuestionVm),
    Finished(ResultVm),
}

#[must_use]
pub fn map_exercise_screen(session: &ExerciseSession) -> ExerciseScreenVm {
    match session.phase() {
        ExercisePhase::Empty => ExerciseScreenVm::Empty,
        ExercisePhase::Finished => session
            .result()
            .map_or(ExerciseScreenVm::Empty, |result| {
                ExerciseScreenVm::Finished(ResultVm::from(&result))
            }),
        ExercisePhase::Answering | ExercisePhase::Feedback => session
            .current_question()
            .map_or(ExerciseScreenVm::Empty, |question| {
                let progress = session.progress();
                let locked = session.is_feedback_visible();
                let draft = session.draft();
                let answer = if question.is_multiple_choice() {
                    AnswerVm::Choice(
                        question
                            .options()
                            .iter()
                            .map(|option| OptionVm {
                                text: option.clone(),
                                selected: option == draft,
                            })
                            .collect(),
                    )
                } else {
                    AnswerVm::Text {
                        draft: draft.to_string(),
                    }
                };
                let feedback = session.last_answer_correct().map(|correct| FeedbackVm {
                    correct,
                    title: if correct { "Correct!" } else { "Not quite" },
                    correct_answer: (!correct).then(|| question.correct_answer().to_string()),
                });
                let action = if locked {
                    ActionVm::Continue
                } else {
                    ActionVm::Check {
                        enabled: session.can_submit(),
                    }
                };
                ExerciseScreenVm::Question(QuestionVm {
                    counter_label: format!("{}/{}", progress.position, progress.total),
                    progress_percent: progress.percent(),
                    prompt: question.prompt().to_string(),
                    hint: question
                        .hint()
                        .filter(|_| !locked)
                        .map(ToString::to_string),
                    answer,
                    locked,
                    feedback,
                    action,
                })
            }),
    }
}
