mod components;
mod exercise;
mod exercise_result;
mod language_select;
mod lesson_path;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exercise::ExerciseView;
pub use exercise_result::ResultCard;
pub use language_select::LanguageSelectView;
pub use lesson_path::LessonPathView;
