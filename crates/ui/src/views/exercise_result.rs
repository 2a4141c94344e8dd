use dioxus::prelude::*;

use crate::views::components::StarRow;
use crate::vm::ResultVm;

#[component]
pub fn ResultCard(result: ResultVm, on_continue: EventHandler<()>) -> Element {
    rsx! {
        div { class: "result",
            span { class: "result__trophy", "🏆" }
            h1 { class: "result__title", "Lesson complete!" }
            p { class: "result__summary", "{result.summary}" }
            div { class: "result__percent", "{result.percent_label}" }
            StarRow { stars: result.stars.clone(), class: "stars stars--large" }
            button {
                class: "result__continue",
                id: "result-continue",
                r#type: "button",
                onclick: move |_| on_continue.call(()),
                "Continue"
            }
            p { class: "result__message", "{result.message}" }
        }
    }
}
