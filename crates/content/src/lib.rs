#![forbid(unsafe_code)]

pub mod error;
pub mod records;
pub mod source;

pub use error::ContentError;
pub use records::{ContentFile, LessonRecord, QuestionRecord};
pub use source::{ContentSource, LessonContent, StaticContent};
