//! Serialized shape of lesson content and its mapping into domain types.

use std::collections::BTreeMap;

use lingo_core::model::{LanguageCode, Lesson, LessonId, Question};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::source::LessonContent;

/// Whole content file: lessons keyed by language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFile {
    pub languages: BTreeMap<LanguageCode, Vec<LessonRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// Question as written in content files, discriminated by its `"type"` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionRecord {
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        question: String,
        options: Vec<String>,
        correct_answer: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Translation {
        question: String,
        correct_answer: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl QuestionRecord {
    /// Validate into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` wrapped in `ContentError::Question` with its position.
    pub fn into_question(
        self,
        language: &LanguageCode,
        lesson_id: LessonId,
        index: usize,
    ) -> Result<Question, ContentError> {
        let built = match self {
            Self::MultipleChoice {
                question,
                options,
                correct_answer,
                hint,
            } => Question::multiple_choice(question, options, correct_answer, hint),
            Self::Translation {
                question,
                correct_answer,
                hint,
            } => Question::translation(question, correct_answer, hint),
        };
        built.map_err(|source| ContentError::Question {
            language: language.clone(),
            lesson_id,
            index,
            source,
        })
    }
}

impl LessonRecord {
    /// Validate the record and all its questions.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Lesson` or `ContentError::Question` on invalid content.
    pub fn into_content(self, language: &LanguageCode) -> Result<LessonContent, ContentError> {
        let lesson_id = LessonId::new(self.id);
        let lesson = Lesson::new(lesson_id, self.title, self.description).map_err(|source| {
            ContentError::Lesson {
                language: language.clone(),
                lesson_id,
                source,
            }
        })?;
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_question(language, lesson_id, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LessonContent::new(lesson, questions))
    }
}
