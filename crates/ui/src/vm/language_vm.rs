use lingo_core::LanguageCatalog;
use lingo_core::model::Language;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageCardVm {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
}

impl From<&Language> for LanguageCardVm {
    fn from(language: &Language) -> Self {
        Self {
            code: language.code().to_string(),
            name: language.name().to_string(),
            native_name: language.native_name().to_string(),
            flag: language.flag().to_string(),
        }
    }
}

#[must_use]
pub fn map_language_cards(catalog: &LanguageCatalog) -> Vec<LanguageCardVm> {
    catalog.languages().iter().map(LanguageCardVm::from).collect()
}
