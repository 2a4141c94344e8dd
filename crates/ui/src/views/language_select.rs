use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LanguageCardVm, map_language_cards};

#[component]
pub fn LanguageSelectView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let cards = use_hook(|| map_language_cards(ctx.catalog()));

    use_effect(move || {
        if let Some(code) = ctx.take_initial_language() {
            tracing::debug!(%code, "opening launch language");
            let _ = navigator.replace(Route::Lessons {
                code: code.to_string(),
            });
        }
    });

    rsx! {
        div { class: "page language-select",
            header { class: "language-select__header",
                span { class: "language-select__icon", "🌐" }
                h1 { "Which language do you want to learn?" }
                p { "Pick a language and start your learning journey" }
            }
            div { class: "language-grid",
                for card in cards {
                    LanguageCard {
                        key: "{card.code}",
                        card,
                        on_select: move |code: String| {
                            let _ = navigator.push(Route::Lessons { code });
                        },
                    }
                }
            }
            p { class: "language-select__footer", "Free • Effective • Fun" }
        }
    }
}

#[component]
fn LanguageCard(card: LanguageCardVm, on_select: EventHandler<String>) -> Element {
    let code = card.code.clone();
    rsx! {
        button {
            class: "language-card",
            id: "language-{card.code}",
            r#type: "button",
            onclick: move |_| on_select.call(code.clone()),
            span { class: "language-card__flag", "{card.flag}" }
            h3 { class: "language-card__name", "{card.name}" }
            p { class: "language-card__native", "{card.native_name}" }
        }
    }
}
