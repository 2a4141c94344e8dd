//! Errors raised while loading lesson content.

use std::path::PathBuf;

use thiserror::Error;

use lingo_core::model::{LanguageCode, LessonError, LessonId, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{language} lesson {lesson_id}: {source}")]
    Lesson {
        language: LanguageCode,
        lesson_id: LessonId,
        #[source]
        source: LessonError,
    },

    #[error("{language} lesson {lesson_id}, question {index}: {source}")]
    Question {
        language: LanguageCode,
        lesson_id: LessonId,
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("{language} has more than one lesson with id {lesson_id}")]
    DuplicateLessonId {
        language: LanguageCode,
        lesson_id: LessonId,
    },
}
