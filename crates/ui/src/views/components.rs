use dioxus::prelude::*;

#[component]
pub fn StarRow(stars: Vec<bool>, #[props(default = "stars")] class: &'static str) -> Element {
    rsx! {
        div { class: "{class}",
            for (slot, filled) in stars.into_iter().enumerate() {
                span {
                    key: "{slot}",
                    class: star_class(filled),
                    if filled { "★" } else { "☆" }
                }
            }
        }
    }
}

fn star_class(filled: bool) -> &'static str {
    if filled { "star star--filled" } else { "star" }
}

#[component]
pub fn ProgressBar(percent: f64) -> Element {
    let width = format!("width: {:.0}%", percent.clamp(0.0, 100.0));
    rsx! {
        div { class: "progress",
            div { class: "progress__fill", style: "{width}" }
        }
    }
}
