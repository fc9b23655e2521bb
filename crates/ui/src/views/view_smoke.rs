use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{OptionId, QuestionId, Quiz};
use services::{AppServices, QuizSource, QuizSourceError, StaticQuizSource};
use storage::repository::Storage;
use storage::slots::USERNAME_SLOT;

use super::LOAD_ERROR_MESSAGE;
use super::test_harness::{ViewKind, drive_dom, mount, mount_auth, setup_services};

struct FailingSource;

#[async_trait]
impl QuizSource for FailingSource {
    async fn fetch(&self, _topic: &str) -> Result<Quiz, QuizSourceError> {
        Err(QuizSourceError::Unavailable("offline".to_string()))
    }
}

async fn fox_services(storage: Storage) -> AppServices {
    setup_services(storage, Arc::new(StaticQuizSource::new())).await
}

async fn finish_quiz(services: &AppServices, username: &str, answers: &[(&str, &str)]) {
    let session = services.session();
    session.start_quiz(username).await.expect("start quiz");
    for (question, option) in answers {
        session.select(
            &QuestionId::new(question).unwrap(),
            &OptionId::new(option).unwrap(),
        );
    }
    session.submit().await.expect("submit quiz");
}

const ALL_CORRECT: [(&str, &str); 5] = [
    ("q1", "o1"),
    ("q2", "o2"),
    ("q3", "o2"),
    ("q4", "o3"),
    ("q5", "o2"),
];

#[tokio::test(flavor = "current_thread")]
async fn fresh_user_sees_username_form() {
    let services = fox_services(Storage::in_memory()).await;
    let mut harness = mount(ViewKind::Shell, &services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("חידון השועלים"), "missing title in {html}");
    assert!(html.contains("auth-username"), "missing username input in {html}");
    assert!(!html.contains("התנתק"), "unexpected logout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn remembered_user_sees_locked_greeting() {
    let storage = Storage::in_memory();
    storage.slots.set(USERNAME_SLOT, "דנה").await.unwrap();
    let services = fox_services(storage).await;
    let mut harness = mount(ViewKind::Shell, &services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("מחובר כ: דנה"), "missing greeting in {html}");
    assert!(html.contains("התנתק"), "missing logout in {html}");
    assert!(!html.contains("auth-username"), "unexpected input in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_shows_error_on_auth() {
    let services = setup_services(Storage::in_memory(), Arc::new(FailingSource)).await;
    services.session().start_quiz("dana").await.unwrap();
    let mut harness = mount(ViewKind::Shell, &services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(LOAD_ERROR_MESSAGE), "missing load error in {html}");
    assert!(html.contains("auth-username"), "missing username input in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_screen_lists_questions_and_progress() {
    let services = fox_services(Storage::in_memory()).await;
    services.session().start_quiz("dana").await.unwrap();
    let mut harness = mount(ViewKind::Shell, &services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("חידון השועלים הגדול"), "missing quiz title in {html}");
    assert!(html.contains("ענית על 0 מתוך 5 שאלות"), "missing progress in {html}");
    assert!(html.contains("לאיזו משפחה ביולוגית משתייך השועל?"), "missing question in {html}");
    assert!(html.contains("משפחת הכלביים"), "missing option in {html}");
    assert!(html.contains("quiz-submit"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_shows_grade_and_summary() {
    let services = fox_services(Storage::in_memory()).await;
    finish_quiz(&services, "dana", &ALL_CORRECT).await;
    let mut harness = mount(ViewKind::Shell, &services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("100/100"), "missing grade in {html}");
    assert!(html.contains("grade-high"), "missing band class in {html}");
    assert!(
        html.contains("ענית נכון על 5 מתוך 5 שאלות"),
        "missing summary in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_reveals_correct_answer_for_mistakes() {
    let services = fox_services(Storage::in_memory()).await;
    let mut answers = ALL_CORRECT;
    answers[3] = ("q4", "o1");
    finish_quiz(&services, "dana", &answers).await;
    let mut harness = mount(ViewKind::Shell, &services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("80/100"), "missing grade in {html}");
    assert!(html.contains("התשובה הנכונה: שועל הפנק"), "missing correction in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_panel_lists_recorded_attempts() {
    let services = fox_services(Storage::in_memory()).await;
    finish_quiz(&services, "dana", &ALL_CORRECT).await;
    let mut harness = mount(ViewKind::Admin, &services);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("dana"), "missing username in {html}");
    assert!(html.contains("5/5"), "missing score in {html}");
    assert!(html.contains("grade-high"), "missing band class in {html}");
    assert!(html.contains("נקה היסטוריה"), "missing clear button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_panel_without_attempts_says_so() {
    let services = fox_services(Storage::in_memory()).await;
    let mut harness = mount(ViewKind::Admin, &services);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("אין נסיונות שמורים."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_form_clears_name_after_logout() {
    let (mut harness, handle) = mount_auth((Some("דנה".to_string()), true));
    harness.rebuild();
    assert!(harness.render().contains("מחובר כ: דנה"));

    harness.dom.in_runtime(|| handle.show((None, false)));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("auth-username"), "missing username input in {html}");
    assert!(!html.contains("דנה"), "logged-out name still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_form_follows_a_new_identity() {
    let (mut harness, handle) = mount_auth((None, false));
    harness.rebuild();

    harness.dom.in_runtime(|| handle.show((Some("noa".to_string()), false)));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("noa"), "missing prefilled name in {html}");
}
