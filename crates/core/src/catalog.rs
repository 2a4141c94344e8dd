use crate::model::{Language, LanguageCode};

/// `(code, name, native name, flag)` for every selectable language, in display order.
const BUILTIN_LANGUAGES: [(&str, &str, &str, &str); 6] = [
    ("es", "Spanish", "Español", "🇪🇸"),
    ("fr", "French", "Français", "🇫🇷"),
    ("de", "German", "Deutsch", "🇩🇪"),
    ("it", "Italian", "Italiano", "🇮🇹"),
    ("pt", "Portuguese", "Português", "🇵🇹"),
    ("ja", "Japanese", "日本語", "🇯🇵"),
];

/// Ordered list of languages offered on the selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    #[must_use]
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// The languages shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        let languages = BUILTIN_LANGUAGES
            .iter()
            .filter_map(|(code, name, native, flag)| {
                LanguageCode::new(*code)
                    .ok()
                    .map(|code| Language::new(code, *name, *native, *flag))
            })
            .collect();
        Self { languages }
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn get(&self, code: &LanguageCode) -> Option<&Language> {
        self.languages.iter().find(|language| language.code() == code)
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_keeps_display_order() {
        let catalog = LanguageCatalog::builtin();
        let codes: Vec<&str> = catalog
            .languages()
            .iter()
            .map(|language| language.code().as_str())
            .collect();
        assert_eq!(codes, vec!["es", "fr", "de", "it", "pt", "ja"]);
    }

    #[test]
    fn lookup_by_code() {
        let catalog = LanguageCatalog::builtin();
        let ja = catalog.get(&LanguageCode::new("ja").unwrap()).unwrap();
        assert_eq!(ja.name(), "Japanese");
        assert_eq!(ja.native_name(), "日本語");
        assert!(catalog.get(&LanguageCode::new("xx").unwrap()).is_none());
    }
}
