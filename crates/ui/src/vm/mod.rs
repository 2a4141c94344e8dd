mod exercise_vm;
mod language_vm;
mod lesson_vm;
mod result_vm;

pub use exercise_vm::{
    ActionVm, AnswerVm, ExerciseEffect, ExerciseIntent, ExerciseScreenVm, FeedbackVm, OptionVm,
    QuestionVm, apply_intent, map_exercise_screen,
};
pub use language_vm::{LanguageCardVm, map_language_cards};
pub use lesson_vm::{LessonCardVm, LessonPathVm, map_lesson_path, star_slots};
pub use result_vm::{ResultVm, encouragement};
