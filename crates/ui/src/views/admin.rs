use dioxus::prelude::*;
use services::ClearConfirmation;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryRowVm, map_history_rows};

/// Attempt history table with a two-step clear.
#[component]
pub fn AdminPanel(on_close: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let admin = ctx.admin();

    let mut confirmation = use_signal(|| None::<ClearConfirmation>);
    let error = use_signal(|| None::<ViewError>);

    let resource = {
        let admin = admin.clone();
        use_resource(move || {
            let admin = admin.clone();
            async move { Ok::<_, ViewError>(map_history_rows(&admin.entries().await)) }
        })
    };

    let on_confirm = {
        let admin = admin.clone();
        use_callback(move |()| {
            let mut confirmation = confirmation;
            let Some(token) = confirmation.write().take() else {
                return;
            };
            let admin = admin.clone();
            let mut error = error;
            let mut resource = resource;
            spawn(async move {
                match admin.clear_history(token).await {
                    Ok(()) => {
                        error.set(None);
                        resource.restart();
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to clear attempt history");
                        error.set(Some(ViewError::Unknown));
                    }
                }
            });
        })
    };

    let state = view_state_from_resource(resource);
    let confirming = confirmation.read().is_some();

    rsx! {
        div { class: "card admin-panel",
            div { class: "admin-header",
                h2 { "היסטוריית נסיונות" }
                button {
                    id: "admin-close",
                    class: "secondary",
                    onclick: move |_| on_close.call(()),
                    "סגור"
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "טוען..." }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { class: "empty", "אין נסיונות שמורים." }
                    } else {
                        table {
                            thead {
                                tr {
                                    th { "משתמש" }
                                    th { "נושא" }
                                    th { "ניקוד" }
                                    th { "ציון" }
                                    th { "תאריך" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    HistoryRow { row }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }

            if confirming {
                div { class: "confirm",
                    p { "למחוק את כל ההיסטוריה? לא ניתן לבטל פעולה זו." }
                    button {
                        id: "admin-clear-confirm",
                        onclick: move |_| on_confirm.call(()),
                        "כן, מחק"
                    }
                    button {
                        id: "admin-clear-cancel",
                        class: "secondary",
                        onclick: move |_| confirmation.set(None),
                        "ביטול"
                    }
                }
            } else {
                button {
                    id: "admin-clear",
                    onclick: move |_| confirmation.set(Some(admin.request_clear())),
                    "נקה היסטוריה"
                }
            }
        }
    }
}

#[component]
fn HistoryRow(row: HistoryRowVm) -> Element {
    rsx! {
        tr {
            td { "{row.username}" }
            td { "{row.topic}" }
            td { "{row.score_str}" }
            td { class: "{row.band_class}", "{row.grade}" }
            td { "{row.taken_at_str}" }
        }
    }
}
