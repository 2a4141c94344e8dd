use thiserror::Error;

use crate::model::{LanguageCodeError, LessonError, QuestionError, StarRatingError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    LanguageCode(#[from] LanguageCodeError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    StarRating(#[from] StarRatingError),
}
