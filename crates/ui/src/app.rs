use dioxus::prelude::*;

use crate::views::QuizShell;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "חידון השועלים" }

        div { class: "app-root", dir: "rtl",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "משהו השתבש" }
                        pre { "{errors:?}" }
                    }
                },
                QuizShell {}
            }
        }
    }
}
