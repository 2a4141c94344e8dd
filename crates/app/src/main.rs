use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use content::{ContentSource, StaticContent};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lingo_core::LanguageCatalog;
use lingo_core::model::LanguageCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, DEFAULT_TITLE, UiApp, build_app_context};

/// Language-learning quiz: pick a language, work through its lessons, earn stars.
#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Open the lesson path of this language on launch (e.g. `es`)
    #[arg(short, long, env = "LINGO_LANGUAGE", value_name = "CODE")]
    language: Option<LanguageCode>,

    /// Load lessons from a JSON file instead of the bundled content
    #[arg(short, long, env = "LINGO_CONTENT", value_name = "FILE")]
    content: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Verbose logging (repeat for more); `LINGO_LOG` overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct DesktopApp {
    content: Arc<StaticContent>,
    initial_language: Option<LanguageCode>,
    title: String,
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<dyn ContentSource> {
        self.content.clone()
    }

    fn initial_language(&self) -> Option<LanguageCode> {
        self.initial_language.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("LINGO_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn load_content(path: Option<&Path>) -> anyhow::Result<StaticContent> {
    match path {
        Some(path) => StaticContent::from_path(path)
            .with_context(|| format!("failed to load lesson content from {}", path.display())),
        None => StaticContent::builtin().context("bundled lesson content is invalid"),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    init_logging(args.verbose);
    tracing::info!("Starting Lingo v{}", env!("CARGO_PKG_VERSION"));

    let content = load_content(args.content.as_deref())?;
    let languages = content.language_codes();
    tracing::info!(languages = languages.len(), "lesson content loaded");

    if let Some(code) = &args.language {
        if LanguageCatalog::builtin().get(code).is_none() {
            tracing::warn!(%code, "launch language is not in the catalog");
        }
        if !languages.contains(code) {
            tracing::warn!(%code, "no lessons for launch language");
        }
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        content: Arc::new(content),
        initial_language: args.language,
        title: args.title.clone(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
