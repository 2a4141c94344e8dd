use dioxus::prelude::*;
use services::ExerciseSession;

use crate::views::components::ProgressBar;
use crate::views::exercise_result::ResultCard;
use crate::vm::{
    ActionVm, AnswerVm, ExerciseEffect, ExerciseIntent, ExerciseScreenVm, FeedbackVm, QuestionVm,
    apply_intent, map_exercise_screen,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Runs one exercise. The host only hears back through `on_exit`, with either
/// `Leave` or the single `Complete` event.
#[component]
pub fn ExerciseView(session: ExerciseSession, on_exit: EventHandler<ExerciseEffect>) -> Element {
    let mut session = use_signal(move || session);

    let dispatch = use_callback(move |intent: ExerciseIntent| {
        let effect = {
            let mut guard = session.write();
            apply_intent(&mut guard, intent)
        };
        if effect != ExerciseEffect::Stay {
            on_exit.call(effect);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ExerciseTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let screen = map_exercise_screen(&session.read());

    match screen {
        ExerciseScreenVm::Empty => rsx! {
            div { class: "exercise exercise--empty",
                p { "No questions available" }
                button {
                    class: "exercise__back-cta",
                    id: "exercise-empty-back",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ExerciseIntent::Back),
                    "Back to lessons"
                }
            }
        },
        ExerciseScreenVm::Finished(result) => rsx! {
            ResultCard {
                result,
                on_continue: move |()| dispatch.call(ExerciseIntent::Finish),
            }
        },
        ExerciseScreenVm::Question(question) => rsx! {
            QuestionScreen { question, dispatch }
        },
    }
}

#[component]
fn QuestionScreen(question: QuestionVm, dispatch: Callback<ExerciseIntent>) -> Element {
    let locked = question.locked;
    rsx! {
        div { class: "exercise",
            header { class: "exercise__header",
                button {
                    class: "icon-button",
                    id: "exercise-back",
                    r#type: "button",
                    title: "Back to lessons",
                    onclick: move |_| dispatch.call(ExerciseIntent::Back),
                    "←"
                }
                ProgressBar { percent: question.progress_percent }
                span { class: "exercise__counter", "{question.counter_label}" }
            }

            section { class: "exercise__card",
                div { class: "exercise__prompt",
                    h2 { "{question.prompt}" }
                    // Audio playback is not wired up.
                    button { class: "icon-button", r#type: "button", title: "Listen", "🔊" }
                }
                if let Some(hint) = question.hint.as_deref() {
                    p { class: "exercise__hint", "Hint: {hint}" }
                }
                match question.answer.clone() {
                    AnswerVm::Choice(options) => rsx! {
                        div { class: "exercise__options",
                            for option in options {
                                OptionButton {
                                    key: "{option.text}",
                                    text: option.text.clone(),
                                    selected: option.selected,
                                    disabled: locked,
                                    on_choose: move |text: String| {
                                        dispatch.call(ExerciseIntent::Choose(text))
                                    },
                                }
                            }
                        }
                    },
                    AnswerVm::Text { draft } => rsx! {
                        input {
                            class: "exercise__input",
                            id: "exercise-answer",
                            r#type: "text",
                            placeholder: "Your answer...",
                            value: "{draft}",
                            disabled: locked,
                            oninput: move |evt: FormEvent| {
                                dispatch.call(ExerciseIntent::Type(evt.value()))
                            },
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter && !locked {
                                    dispatch.call(ExerciseIntent::Check);
                                }
                            },
                        }
                    },
                }
            }

            if let Some(feedback) = question.feedback.clone() {
                FeedbackPanel { feedback }
            }

            div { class: "exercise__actions",
                match question.action {
                    ActionVm::Check { enabled } => rsx! {
                        button {
                            class: "exercise__cta",
                            id: "exercise-check",
                            r#type: "button",
                            disabled: !enabled,
                            onclick: move |_| dispatch.call(ExerciseIntent::Check),
                            "Check"
                        }
                    },
                    ActionVm::Continue => rsx! {
                        button {
                            class: "exercise__cta",
                            id: "exercise-continue",
                            r#type: "button",
                            onclick: move |_| dispatch.call(ExerciseIntent::Continue),
                            "Continue"
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    text: String,
    selected: bool,
    disabled: bool,
    on_choose: EventHandler<String>,
) -> Element {
    let value = text.clone();
    rsx! {
        button {
            class: if selected { "option option--selected" } else { "option" },
            r#type: "button",
            disabled: disabled,
            onclick: move |_| on_choose.call(value.clone()),
            "{text}"
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    rsx! {
        div {
            class: if feedback.correct {
                "feedback feedback--correct"
            } else {
                "feedback feedback--wrong"
            },
            span { class: "feedback__icon", if feedback.correct { "✔" } else { "✘" } }
            div {
                h3 { class: "feedback__title", "{feedback.title}" }
                if let Some(answer) = feedback.correct_answer.as_deref() {
                    p { class: "feedback__answer",
                        "The correct answer is: "
                        strong { "{answer}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ExerciseTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ExerciseIntent>>>>,
    session: Rc<RefCell<Option<Signal<ExerciseSession>>>>,
}

#[cfg(test)]
impl ExerciseTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<ExerciseIntent>,
        session: Signal<ExerciseSession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<ExerciseIntent> {
        (*self.dispatch.borrow()).expect("exercise dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<ExerciseSession> {
        (*self.session.borrow()).expect("exercise session registered")
    }
}
