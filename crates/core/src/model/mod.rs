mod completion;
mod ids;
mod language;
mod lesson;
mod question;
mod roster;
mod stars;

pub use ids::{LanguageCode, LanguageCodeError, LessonId};

pub use completion::LessonCompletion;
pub use language::Language;
pub use lesson::{Lesson, LessonError, LessonStatus};
pub use question::{Question, QuestionError, answers_match};
pub use roster::{CompletionOutcome, LessonRoster, RosterProgress};
pub use stars::{StarRating, StarRatingError, score_percent};
