use dioxus::prelude::*;
use dioxus_router::use_navigator;
use lingo_core::model::{LanguageCode, LessonId, LessonStatus};
use services::{ExerciseSession, ProgressionService};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{ProgressBar, StarRow};
use crate::views::exercise::ExerciseView;
use crate::vm::{ExerciseEffect, LessonCardVm, map_lesson_path};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonPathView(code: String) -> Element {
    let navigator = use_navigator();
    match LanguageCode::new(code.as_str()) {
        Ok(language) => rsx! {
            LessonPath { key: "{language}", language }
        },
        Err(err) => {
            tracing::warn!(%code, %err, "invalid language in route");
            rsx! {
                div { class: "page lesson-path lesson-path--invalid",
                    p { "Unknown language: {code}" }
                    button {
                        class: "lesson-path__back-cta",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "Choose a language"
                    }
                }
            }
        }
    }
}

/// Lesson path of one language. Progress lives only as long as this component.
#[component]
fn LessonPath(language: LanguageCode) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let content = ctx.content();

    let progression = use_signal({
        let content = content.clone();
        let language = language.clone();
        move || ProgressionService::start(content.as_ref(), language)
    });
    let exercise = use_signal(|| None::<ExerciseSession>);

    let enter = use_callback(move |id: LessonId| {
        let mut progression = progression;
        let mut exercise = exercise;
        if !progression.write().select_lesson(id) {
            return;
        }
        let session = progression.read().begin_exercise(content.as_ref());
        exercise.set(session);
    });

    let on_exit = use_callback(move |effect: ExerciseEffect| {
        let mut progression = progression;
        let mut exercise = exercise;
        match effect {
            ExerciseEffect::Complete(completion) => {
                progression.write().on_exercise_complete(completion);
            }
            ExerciseEffect::Leave | ExerciseEffect::Stay => progression.write().leave_exercise(),
        }
        exercise.set(None);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonPathTestHandles>() {
                handles.register(enter, progression);
            }
        }
    }

    if let Some(session) = exercise() {
        let lesson_key = session.lesson_id().value();
        return rsx! {
            ExerciseView {
                key: "{lesson_key}",
                session,
                on_exit: move |effect: ExerciseEffect| on_exit.call(effect),
            }
        };
    }

    let vm = map_lesson_path(ctx.catalog().get(&language), &progression.read());

    rsx! {
        div { class: "page lesson-path",
            header { class: "lesson-path__header",
                button {
                    class: "icon-button",
                    id: "lesson-path-back",
                    r#type: "button",
                    title: "Choose another language",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "←"
                }
                div { class: "lesson-path__title",
                    h1 { "{vm.flag} {vm.language_name}" }
                    p { class: "lesson-path__progress-label", "{vm.progress_label}" }
                }
            }
            ProgressBar { percent: vm.progress_percent }

            if vm.is_empty() {
                p { class: "lesson-path__empty", "No lessons available yet." }
            }

            ol { class: "lesson-list",
                for (position, card) in vm.lessons.iter().cloned().enumerate() {
                    LessonCard {
                        key: "{card.id}",
                        position: position + 1,
                        card: card.clone(),
                        on_enter: move |id: LessonId| enter.call(id),
                    }
                }
            }
        }
    }
}

#[component]
fn LessonCard(position: usize, card: LessonCardVm, on_enter: EventHandler<LessonId>) -> Element {
    let id = card.id;
    let can_enter = card.can_enter();
    let status_label = card.status_label();
    let badge = match card.status {
        LessonStatus::Locked => "🔒".to_string(),
        LessonStatus::Completed => "✓".to_string(),
        LessonStatus::Unlocked => position.to_string(),
    };
    rsx! {
        li {
            class: card.status_class(),
            id: "lesson-{id}",
            onclick: move |_| {
                if can_enter {
                    on_enter.call(id);
                }
            },
            span { class: "lesson-card__badge", "{badge}" }
            div { class: "lesson-card__body",
                h3 { "{card.title}" }
                p { class: "lesson-card__description", "{card.description}" }
                span { class: "lesson-card__status", "{status_label}" }
                StarRow { stars: card.stars.clone() }
            }
            if card.shows_start() {
                button { class: "lesson-card__start", r#type: "button", "Start" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonPathTestHandles {
    enter: Rc<RefCell<Option<Callback<LessonId>>>>,
    progression: Rc<RefCell<Option<Signal<ProgressionService>>>>,
}

#[cfg(test)]
impl LessonPathTestHandles {
    pub(crate) fn register(
        &self,
        enter: Callback<LessonId>,
        progression: Signal<ProgressionService>,
    ) {
        *self.enter.borrow_mut() = Some(enter);
        *self.progression.borrow_mut() = Some(progression);
    }

    pub(crate) fn enter(&self) -> Callback<LessonId> {
        (*self.enter.borrow()).expect("lesson path enter registered")
    }

    pub(crate) fn progression(&self) -> Signal<ProgressionService> {
        (*self.progression.borrow()).expect("lesson path progression registered")
    }
}
