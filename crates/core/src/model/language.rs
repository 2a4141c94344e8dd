use crate::model::ids::LanguageCode;

/// A language the learner can pick. Static and immutable, identified by its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    code: LanguageCode,
    name: String,
    native_name: String,
    flag: String,
}

impl Language {
    #[must_use]
    pub fn new(
        code: LanguageCode,
        name: impl Into<String>,
        native_name: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            native_name: native_name.into(),
            flag: flag.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }
}
