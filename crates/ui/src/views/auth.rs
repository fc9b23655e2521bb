use dioxus::prelude::*;

use crate::views::LOAD_ERROR_MESSAGE;

#[component]
pub fn AuthView(
    #[props(!optional)] username: Option<String>,
    locked: bool,
    load_error: bool,
    loading: bool,
    on_start: EventHandler<String>,
    on_logout: EventHandler<()>,
) -> Element {
    let display_name = username.unwrap_or_default();
    let mut entered = use_signal(|| display_name.clone());

    // The view stays mounted across logout and failed starts, so the input
    // follows the identity it was last shown for.
    let mut shown_for = use_signal(|| (display_name.clone(), locked));
    if *shown_for.peek() != (display_name.clone(), locked) {
        shown_for.set((display_name.clone(), locked));
        entered.set(display_name.clone());
    }
    let entered_value = entered();
    let blank = entered_value.trim().is_empty();
    let start_label = if loading { "טוען..." } else { "התחל חידון" };

    rsx! {
        div { class: "card auth",
            if locked {
                p { class: "welcome", "מחובר כ: {display_name}" }
                div { class: "actions",
                    button {
                        id: "auth-start",
                        disabled: loading,
                        onclick: move |_| on_start.call(String::new()),
                        "{start_label}"
                    }
                    button {
                        id: "auth-logout",
                        class: "secondary",
                        disabled: loading,
                        onclick: move |_| on_logout.call(()),
                        "התנתק"
                    }
                }
            } else {
                label { r#for: "auth-username", "שם משתמש" }
                input {
                    id: "auth-username",
                    r#type: "text",
                    placeholder: "הכנס את שמך",
                    value: "{entered_value}",
                    oninput: move |evt| entered.set(evt.value()),
                }
                button {
                    id: "auth-start",
                    disabled: loading || blank,
                    onclick: move |_| on_start.call(entered()),
                    "{start_label}"
                }
            }

            if load_error {
                p { class: "error", "{LOAD_ERROR_MESSAGE}" }
            }
        }
    }
}
