use std::collections::HashMap;
use std::path::Path;

use lingo_core::model::{LanguageCode, Lesson, LessonId, Question};
use tracing::debug;

use crate::error::ContentError;
use crate::records::ContentFile;

/// Lessons bundled with the app, keyed by language code.
const BUILTIN_JSON: &str = include_str!("../data/lessons.json");

/// One lesson together with its ordered questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContent {
    lesson: Lesson,
    questions: Vec<Question>,
}

impl LessonContent {
    #[must_use]
    pub fn new(lesson: Lesson, questions: Vec<Question>) -> Self {
        Self { lesson, questions }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Read-only lookup of lesson content.
///
/// Unknown language codes and lesson ids yield empty collections, never errors.
pub trait ContentSource: Send + Sync {
    /// Lessons for a language in ascending id order.
    fn lessons(&self, language: &LanguageCode) -> Vec<LessonContent>;

    /// Questions of one lesson, in presentation order.
    fn questions(&self, language: &LanguageCode, lesson_id: LessonId) -> Vec<Question> {
        self.lessons(language)
            .into_iter()
            .find(|content| content.lesson().id() == lesson_id)
            .map(|content| content.questions)
            .unwrap_or_default()
    }
}

/// In-memory content, either bundled or loaded once from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    languages: HashMap<LanguageCode, Vec<LessonContent>>,
}

impl StaticContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lesson bundle compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the bundled JSON does not validate.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Parse and validate a JSON content document.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed JSON and validation variants for
    /// invalid lessons or questions.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Load content from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read, otherwise as
    /// [`StaticContent::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "read content file");
        Self::from_json_str(&json)
    }

    /// Validate a parsed content file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` for invalid lessons, questions or duplicate lesson ids.
    pub fn from_file(file: ContentFile) -> Result<Self, ContentError> {
        let mut content = Self::new();
        for (language, records) in file.languages {
            let lessons = records
                .into_iter()
                .map(|record| record.into_content(&language))
                .collect::<Result<Vec<_>, _>>()?;
            content = content.with_language(language, lessons)?;
        }
        Ok(content)
    }

    /// Add or replace the lessons of one language.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateLessonId` if two lessons share an id.
    pub fn with_language(
        mut self,
        language: LanguageCode,
        mut lessons: Vec<LessonContent>,
    ) -> Result<Self, ContentError> {
        lessons.sort_by_key(|content| content.lesson().id());
        if let Some(pair) = lessons
            .windows(2)
            .find(|pair| pair[0].lesson().id() == pair[1].lesson().id())
        {
            return Err(ContentError::DuplicateLessonId {
                language,
                lesson_id: pair[0].lesson().id(),
            });
        }
        debug!(%language, lessons = lessons.len(), "registered lesson content");
        self.languages.insert(language, lessons);
        Ok(self)
    }

    /// Language codes that have content, sorted.
    #[must_use]
    pub fn language_codes(&self) -> Vec<LanguageCode> {
        let mut codes: Vec<LanguageCode> = self.languages.keys().cloned().collect();
        codes.sort();
        codes
    }
}

impl ContentSource for StaticContent {
    fn lessons(&self, language: &LanguageCode) -> Vec<LessonContent> {
        self.languages.get(language).cloned().unwrap_or_default()
    }

    fn questions(&self, language: &LanguageCode, lesson_id: LessonId) -> Vec<Question> {
        self.languages
            .get(language)
            .and_then(|lessons| {
                lessons
                    .iter()
                    .find(|content| content.lesson().id() == lesson_id)
            })
            .map(|content| content.questions().to_vec())
            .unwrap_or_default()
    }
}
