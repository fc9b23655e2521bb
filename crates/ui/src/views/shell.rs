use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{OptionId, QuestionId};
use services::{AdminGate, Screen, SessionController, SessionError, SessionState};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{AdminPanel, AuthView, QuizView, ResultsView, ViewError};
use crate::vm::{QuizVm, ResultsVm};

/// Commit the outcome of an async transition into the view signals.
///
/// On failure the controller may still have moved (e.g. to `Loading`), so the
/// snapshot is re-read.
fn settle(
    session: &SessionController,
    result: Result<SessionState, SessionError>,
    mut state: Signal<SessionState>,
    mut error: Signal<Option<ViewError>>,
) {
    match result {
        Ok(next) => {
            error.set(None);
            state.set(next);
        }
        Err(err) => {
            if let Some(view_error) = ViewError::from_session(&err) {
                warn!(error = %err, "session transition failed");
                error.set(Some(view_error));
            }
            state.set(session.snapshot());
        }
    }
}

/// Top-level screen switch. Owns the session snapshot and the admin gate.
#[component]
pub fn QuizShell() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();

    let state = use_signal({
        let session = Arc::clone(&session);
        move || session.snapshot()
    });
    let error = use_signal(|| None::<ViewError>);
    let pending = use_signal(|| false);
    let mut gate = use_signal(AdminGate::default);

    let on_start = {
        let session = Arc::clone(&session);
        use_callback(move |username: String| {
            let session = Arc::clone(&session);
            let mut pending = pending;
            pending.set(true);
            spawn(async move {
                let result = session.start_quiz(&username).await;
                pending.set(false);
                settle(&session, result, state, error);
            });
        })
    };

    let on_select = {
        let session = Arc::clone(&session);
        use_callback(move |(question, option): (QuestionId, OptionId)| {
            let mut state = state;
            state.set(session.select(&question, &option));
        })
    };

    let on_submit = {
        let session = Arc::clone(&session);
        use_callback(move |()| {
            let session = Arc::clone(&session);
            let mut pending = pending;
            pending.set(true);
            spawn(async move {
                let result = session.submit().await;
                pending.set(false);
                settle(&session, result, state, error);
            });
        })
    };

    let on_reset = {
        let session = Arc::clone(&session);
        use_callback(move |()| {
            let mut state = state;
            let mut error = error;
            error.set(None);
            state.set(session.reset());
        })
    };

    let on_logout = {
        let session = Arc::clone(&session);
        use_callback(move |()| {
            let session = Arc::clone(&session);
            spawn(async move {
                let result = session.logout().await;
                settle(&session, result, state, error);
            });
        })
    };

    let snapshot = state();
    let admin_open = gate.read().is_open();
    let busy = pending();

    rsx! {
        header {
            // Ten taps on the title open the admin panel.
            h1 {
                class: "quiz-title",
                onclick: move |_| {
                    gate.write().tap();
                },
                "חידון השועלים"
            }
        }

        if admin_open {
            AdminPanel {
                on_close: move |()| gate.write().close(),
            }
        }

        if let Some(err) = error() {
            p { class: "error", "{err.message()}" }
        }

        match snapshot.screen() {
            Screen::Auth => rsx! {
                AuthView {
                    username: snapshot.identity().map(|identity| identity.username().to_string()),
                    locked: snapshot.is_identity_locked(),
                    load_error: snapshot.load_error(),
                    loading: busy,
                    on_start,
                    on_logout,
                }
            },
            Screen::Loading => rsx! {
                p { class: "loading", "טוען את החידון..." }
            },
            Screen::Quiz => match QuizVm::from_state(&snapshot) {
                Some(vm) => rsx! {
                    QuizView { vm, submitting: busy, on_select, on_submit }
                },
                None => rsx! {
                    p { class: "error", "{ViewError::Unknown.message()}" }
                },
            },
            Screen::Results => match ResultsVm::from_state(&snapshot) {
                Some(vm) => rsx! {
                    ResultsView { vm, on_reset }
                },
                None => rsx! {
                    p { class: "error", "{ViewError::Unknown.message()}" }
                },
            },
        }
    }
}
