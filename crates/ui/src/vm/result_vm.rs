use lingo_core::model::StarRating;
use services::ExerciseResult;

use crate::vm::lesson_vm::star_slots;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub summary: String,
    pub percent_label: String,
    pub stars: Vec<bool>,
    pub message: &'static str,
}

impl From<&ExerciseResult> for ResultVm {
    fn from(result: &ExerciseResult) -> Self {
        Self {
            summary: format!(
                "{} of {} answered correctly",
                result.correct, result.total
            ),
            percent_label: format!("{}%", result.percent()),
            stars: star_slots(result.stars, StarRating::MAX),
            message: encouragement(result.stars),
        }
    }
}

#[must_use]
pub fn encouragement(stars: StarRating) -> &'static str {
    match stars.value() {
        3 => "Perfect! You're a star!",
        2 => "Very good! Keep it up!",
        1 => "Well done! Keep practicing!",
        _ => "Don't give up! Try again!",
    }
}
