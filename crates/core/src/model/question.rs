use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("correct answer cannot be empty")]
    EmptyCorrectAnswer,

    #[error("multiple-choice question needs at least one option")]
    NoOptions,

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer {0:?} is not one of the options")]
    AnswerNotInOptions(String),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single exercise prompt.
///
/// Immutable once built. Both variants are judged with [`answers_match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        correct_answer: String,
        hint: Option<String>,
    },
    Translation {
        prompt: String,
        correct_answer: String,
        hint: Option<String>,
    },
}

impl Question {
    /// Build a multiple-choice question.
    ///
    /// Options keep their given order. The correct answer must match one of them
    /// under the same rule used to judge answers, otherwise the question could never
    /// be answered correctly.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank text, missing or duplicate options, or an
    /// answer that is not among the options.
    pub fn multiple_choice(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = non_blank(prompt.into(), QuestionError::EmptyPrompt)?;
        let correct_answer = non_blank(correct_answer.into(), QuestionError::EmptyCorrectAnswer)?;

        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        for (idx, option) in options.iter().enumerate() {
            if options[..idx].iter().any(|seen| seen == option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        if !options.iter().any(|option| answers_match(option, &correct_answer)) {
            return Err(QuestionError::AnswerNotInOptions(correct_answer));
        }

        Ok(Self::MultipleChoice {
            prompt,
            options,
            correct_answer,
            hint: normalize_hint(hint),
        })
    }

    /// Build a free-text translation question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or answer is blank.
    pub fn translation(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = non_blank(prompt.into(), QuestionError::EmptyPrompt)?;
        let correct_answer = non_blank(correct_answer.into(), QuestionError::EmptyCorrectAnswer)?;
        Ok(Self::Translation {
            prompt,
            correct_answer,
            hint: normalize_hint(hint),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Self::MultipleChoice { prompt, .. } | Self::Translation { prompt, .. } => prompt,
        }
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        match self {
            Self::MultipleChoice { correct_answer, .. }
            | Self::Translation { correct_answer, .. } => correct_answer,
        }
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MultipleChoice { hint, .. } | Self::Translation { hint, .. } => hint.as_deref(),
        }
    }

    /// Options for multiple-choice questions; empty for translations.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            Self::MultipleChoice { options, .. } => options,
            Self::Translation { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice { .. })
    }

    /// Judge a candidate answer against this question's correct answer.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        answers_match(candidate, self.correct_answer())
    }
}

/// Case-insensitive comparison after trimming surrounding whitespace on both sides.
///
/// Nothing else is normalized: accents, punctuation and inner spacing must match.
#[must_use]
pub fn answers_match(candidate: &str, correct: &str) -> bool {
    candidate.trim().to_lowercase() == correct.trim().to_lowercase()
}

fn non_blank(value: String, err: QuestionError) -> Result<String, QuestionError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

fn normalize_hint(hint: Option<String>) -> Option<String> {
    hint.filter(|value| !value.trim().is_empty())
}
