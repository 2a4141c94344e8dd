use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use content::ContentSource;
use lingo_core::LanguageCatalog;
use lingo_core::model::LanguageCode;

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<dyn ContentSource>;
    fn initial_language(&self) -> Option<LanguageCode>;

    fn catalog(&self) -> LanguageCatalog {
        LanguageCatalog::builtin()
    }

    fn title(&self) -> String {
        DEFAULT_TITLE.to_string()
    }
}

pub const DEFAULT_TITLE: &str = "Lingo";

#[derive(Clone)]
pub struct AppContext {
    content: Arc<dyn ContentSource>,
    catalog: Arc<LanguageCatalog>,
    title: Arc<str>,
    initial_language: Option<LanguageCode>,
    initial_language_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_language = app.initial_language();
        Self {
            content: app.content(),
            catalog: Arc::new(app.catalog()),
            title: app.title().into(),
            initial_language_once: Arc::new(AtomicBool::new(initial_language.is_some())),
            initial_language,
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<dyn ContentSource> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Window title; the root component keeps the document title in sync with it.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The launch language, handed out once so that "back" shows the selection screen.
    #[must_use]
    pub fn take_initial_language(&self) -> Option<LanguageCode> {
        if self.initial_language_once.swap(false, Ordering::AcqRel) {
            self.initial_language.clone()
        } else {
            None
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::StaticContent;

    struct FixedApp(Option<LanguageCode>);

    impl UiApp for FixedApp {
        fn content(&self) -> Arc<dyn ContentSource> {
            Arc::new(StaticContent::new())
        }

        fn initial_language(&self) -> Option<LanguageCode> {
            self.0.clone()
        }
    }

    struct TitledApp(&'static str);

    impl UiApp for TitledApp {
        fn content(&self) -> Arc<dyn ContentSource> {
            Arc::new(StaticContent::new())
        }

        fn initial_language(&self) -> Option<LanguageCode> {
            None
        }

        fn title(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn initial_language_is_taken_once() {
        let es = LanguageCode::new("es").unwrap();
        let app: Arc<dyn UiApp> = Arc::new(FixedApp(Some(es.clone())));
        let ctx = build_app_context(&app);
        let clone = ctx.clone();

        assert_eq!(clone.take_initial_language(), Some(es.clone()));
        assert_eq!(ctx.take_initial_language(), None);
    }

    #[test]
    fn no_initial_language_means_selection_screen() {
        let app: Arc<dyn UiApp> = Arc::new(FixedApp(None));
        let ctx = build_app_context(&app);
        assert_eq!(ctx.take_initial_language(), None);
        assert_eq!(ctx.catalog().languages().len(), 6);
        assert_eq!(ctx.title(), DEFAULT_TITLE);
    }

    #[test]
    fn configured_title_reaches_context() {
        let app: Arc<dyn UiApp> = Arc::new(TitledApp("Lingo (Spanish)"));
        let ctx = build_app_context(&app);
        assert_eq!(ctx.clone().title(), "Lingo (Spanish)");
    }
}
