use content::{LessonContent, StaticContent};
use lingo_core::model::{Lesson, LessonId, LessonStatus, StarRating};
use services::ExerciseSession;

use super::test_harness::{
    ViewKind, es, greeting_questions, sample_content, setup_exercise_harness, setup_view_harness,
};
use crate::vm::{ExerciseEffect, ExerciseIntent};

#[test]
fn language_select_smoke_lists_catalog() {
    let mut harness = setup_view_harness(ViewKind::LanguageSelect, sample_content());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Which language do you want to learn?"), "{html}");
    for expected in ["Spanish", "Español", "French", "German", "Italian", "Portuguese", "日本語"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[test]
fn lesson_path_smoke_renders_fresh_path() {
    let mut harness = setup_view_harness(ViewKind::LessonPath("es"), sample_content());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Spanish"), "{html}");
    assert!(html.contains("0 of 3 lessons completed"), "{html}");
    assert!(html.contains("Greetings"), "{html}");
    assert!(html.contains("Count to ten"), "{html}");
    assert_eq!(html.matches(">Start<").count(), 1, "{html}");
    assert_eq!(html.matches(">Locked<").count(), 2, "{html}");
}

#[test]
fn lesson_path_smoke_handles_unknown_and_invalid_codes() {
    let mut harness = setup_view_harness(ViewKind::LessonPath("nl"), sample_content());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0 of 0 lessons completed"), "{html}");
    assert!(html.contains("No lessons available yet."), "{html}");

    let mut harness = setup_view_harness(ViewKind::LessonPath("4x4"), sample_content());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Unknown language: 4x4"), "{html}");
}

#[test]
fn locked_lesson_cannot_be_entered() {
    let mut harness = setup_view_harness(ViewKind::LessonPath("es"), sample_content());
    harness.rebuild();
    harness.enter(2);
    let html = harness.render();

    assert!(html.contains("0 of 3 lessons completed"), "{html}");
    assert!(!html.contains("exercise__card"), "{html}");
    assert_eq!(harness.progression().active_lesson_id(), None);
}

#[test]
fn exercise_flow_completes_lesson_and_unlocks_next() {
    let mut harness = setup_view_harness(ViewKind::LessonPath("es"), sample_content());
    harness.rebuild();
    harness.enter(1);

    let html = harness.render();
    assert!(html.contains("How do you say"), "{html}");
    assert!(html.contains("1/2"), "{html}");
    assert!(html.contains("Hint: Starts with H"), "{html}");
    assert!(html.contains("exercise-check"), "{html}");

    harness.dispatch(ExerciseIntent::Choose("Hola".into()));
    harness.dispatch(ExerciseIntent::Check);
    let html = harness.render();
    assert!(html.contains("Correct!"), "{html}");
    assert!(!html.contains("Hint:"), "{html}");
    assert!(html.contains("exercise-continue"), "{html}");

    harness.dispatch(ExerciseIntent::Continue);
    let html = harness.render();
    assert!(html.contains("2/2"), "{html}");
    assert!(html.contains("exercise-answer"), "{html}");

    harness.dispatch(ExerciseIntent::Type("gracias".into()));
    harness.dispatch(ExerciseIntent::Check);
    harness.dispatch(ExerciseIntent::Continue);
    let html = harness.render();
    assert!(html.contains("Lesson complete!"), "{html}");
    assert!(html.contains("2 of 2 answered correctly"), "{html}");
    assert!(html.contains("100%"), "{html}");
    assert!(html.contains("Perfect!"), "{html}");

    harness.dispatch(ExerciseIntent::Finish);
    let html = harness.render();
    assert!(html.contains("1 of 3 lessons completed"), "{html}");

    let progression = harness.progression();
    let first = progression.roster().get(LessonId::new(1)).unwrap();
    assert_eq!(first.status(), LessonStatus::Completed);
    assert_eq!(first.stars(), StarRating::new(3).unwrap());
    let second = progression.roster().get(LessonId::new(2)).unwrap();
    assert_eq!(second.status(), LessonStatus::Unlocked);
    assert_eq!(progression.active_lesson_id(), None);
}

#[test]
fn backing_out_of_exercise_records_nothing() {
    let mut harness = setup_view_harness(ViewKind::LessonPath("es"), sample_content());
    harness.rebuild();
    harness.enter(1);
    harness.dispatch(ExerciseIntent::Choose("Hola".into()));
    harness.dispatch(ExerciseIntent::Check);
    harness.dispatch(ExerciseIntent::Back);

    let html = harness.render();
    assert!(html.contains("0 of 3 lessons completed"), "{html}");
    let progression = harness.progression();
    assert!(progression.roster().get(LessonId::new(2)).unwrap().is_locked());
    assert_eq!(progression.active_lesson_id(), None);
}

#[test]
fn empty_lesson_shows_placeholder_and_goes_back() {
    let lesson = Lesson::new(LessonId::new(1), "Review", "").unwrap();
    let content = StaticContent::new()
        .with_language(es(), vec![LessonContent::new(lesson, Vec::new())])
        .unwrap();
    let mut harness = setup_view_harness(ViewKind::LessonPath("es"), content);
    harness.rebuild();
    harness.enter(1);

    let html = harness.render();
    assert!(html.contains("No questions available"), "{html}");

    harness.dispatch(ExerciseIntent::Back);
    let html = harness.render();
    assert!(html.contains("0 of 1 lessons completed"), "{html}");
}

#[test]
fn wrong_answer_feedback_shows_correct_answer() {
    let mut session = ExerciseSession::new(LessonId::new(1), greeting_questions());
    session.choose_option("Adiós").unwrap();
    session.submit();
    let harness = setup_exercise_harness(session);
    let html = harness.render();

    assert!(html.contains("Not quite"), "{html}");
    assert!(html.contains("The correct answer is:"), "{html}");
    assert!(html.contains("<strong>Hola</strong>"), "{html}");
    assert!(html.contains("option--selected"), "{html}");
    assert!(!html.contains("exercise-check"), "{html}");
}

#[test]
fn standalone_exercise_reports_completion_once() {
    let mut session = ExerciseSession::new(
        LessonId::new(7),
        vec![lingo_core::model::Question::translation("One", "Uno", None).unwrap()],
    );
    session.set_draft("dos").unwrap();
    session.submit();
    session.advance();
    let mut harness = setup_exercise_harness(session);

    let html = harness.render();
    assert!(html.contains("0 of 1 answered correctly"), "{html}");
    assert!(html.contains("0%"), "{html}");

    harness.dispatch(ExerciseIntent::Finish);
    harness.dispatch(ExerciseIntent::Finish);
    let exits = harness.exits.borrow().clone();
    assert_eq!(exits.len(), 1);
    assert!(matches!(
        exits[0],
        ExerciseEffect::Complete(completion)
            if completion.lesson_id == LessonId::new(7) && completion.stars == StarRating::ZERO
    ));
    assert!(harness.session().take_completion().is_none());
}
