use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{LanguageSelectView, LessonPathView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LanguageSelectView)] Home {},
        #[route("/learn/:code", LessonPathView)] Lessons { code: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
