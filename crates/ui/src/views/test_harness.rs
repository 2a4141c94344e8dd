use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use content::{ContentSource, LessonContent, StaticContent};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lingo_core::model::{LanguageCode, Lesson, LessonId, Question};
use services::{ExerciseSession, ProgressionService};

use crate::context::{UiApp, build_app_context};
use crate::views::exercise::{ExerciseTestHandles, ExerciseView};
use crate::views::lesson_path::LessonPathTestHandles;
use crate::views::{LanguageSelectView, LessonPathView};
use crate::vm::{ExerciseEffect, ExerciseIntent};

struct TestApp {
    content: Arc<StaticContent>,
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<dyn ContentSource> {
        self.content.clone()
    }

    fn initial_language(&self) -> Option<LanguageCode> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    LanguageSelect,
    LessonPath(&'static str),
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    pub path: LessonPathTestHandles,
    pub exercise: ExerciseTestHandles,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.path.clone());
    use_context_provider(|| props.handles.exercise.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::LanguageSelect => rsx! { LanguageSelectView {} },
        ViewKind::LessonPath(code) => rsx! { LessonPathView { code: code.to_string() } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Click a lesson card on the path.
    pub fn enter(&mut self, id: u32) {
        let enter = self.handles.path.enter();
        self.dom.in_runtime(|| enter.call(LessonId::new(id)));
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: ExerciseIntent) {
        let dispatch = self.handles.exercise.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn progression(&self) -> ProgressionService {
        let progression = self.handles.path.progression();
        self.dom.in_runtime(|| (*progression.peek()).clone())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, content: StaticContent) -> ViewHarness {
    let handles = HarnessHandles::default();
    let app = Arc::new(TestApp {
        content: Arc::new(content),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

// ─── Standalone exercise ──────────────────────────────────────────────────────

#[derive(Props, Clone)]
struct ExerciseHarnessProps {
    session: ExerciseSession,
    handles: ExerciseTestHandles,
    exits: Rc<RefCell<Vec<ExerciseEffect>>>,
}

impl PartialEq for ExerciseHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ExerciseHarnessRoot(props: ExerciseHarnessProps) -> Element {
    use_context_provider(|| props.handles.clone());
    let exits = Rc::clone(&props.exits);
    rsx! {
        ExerciseView {
            session: props.session.clone(),
            on_exit: move |effect: ExerciseEffect| exits.borrow_mut().push(effect),
        }
    }
}

pub struct ExerciseHarness {
    pub dom: VirtualDom,
    pub handles: ExerciseTestHandles,
    pub exits: Rc<RefCell<Vec<ExerciseEffect>>>,
}

impl ExerciseHarness {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: ExerciseIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> ExerciseSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| (*session.peek()).clone())
    }
}

/// Render `session` on its own, in whatever state it was prepared in.
pub fn setup_exercise_harness(session: ExerciseSession) -> ExerciseHarness {
    let handles = ExerciseTestHandles::default();
    let exits = Rc::new(RefCell::new(Vec::new()));
    let mut dom = VirtualDom::new_with_props(
        ExerciseHarnessRoot,
        ExerciseHarnessProps {
            session,
            handles: handles.clone(),
            exits: Rc::clone(&exits),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    ExerciseHarness {
        dom,
        handles,
        exits,
    }
}

// ─── Fixtures ─────────────────────────────────────────────────────────────────

pub fn es() -> LanguageCode {
    LanguageCode::new("es").expect("valid code")
}

pub fn greeting_questions() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "How do you say 'Hello'?",
            vec!["Hola".to_string(), "Adiós".to_string(), "Gracias".to_string()],
            "Hola",
            Some("Starts with H".to_string()),
        )
        .expect("valid question"),
        Question::translation("Thank you", "Gracias", None).expect("valid question"),
    ]
}

/// Spanish path: Greetings (2 questions), Numbers (1 question), Review (none).
pub fn sample_content() -> StaticContent {
    let lesson = |id: u32, title: &str, description: &str, questions: Vec<Question>| {
        let lesson = Lesson::new(LessonId::new(id), title, description).expect("valid lesson");
        LessonContent::new(lesson, questions)
    };
    let numbers = vec![Question::translation("One", "Uno", None).expect("valid question")];
    StaticContent::new()
        .with_language(
            es(),
            vec![
                lesson(1, "Greetings", "Say hello", greeting_questions()),
                lesson(2, "Numbers", "Count to ten", numbers),
                lesson(3, "Review", "Mixed practice", Vec::new()),
            ],
        )
        .expect("valid content")
}
