use dioxus::prelude::*;

use crate::vm::{ResultsVm, ReviewVm};

#[component]
pub fn ResultsView(vm: ResultsVm, on_reset: EventHandler<()>) -> Element {
    rsx! {
        div { class: "results",
            div { class: "card",
                h2 { "התוצאה שלך" }
                p { class: "grade {vm.band_class}", "{vm.grade}/100" }
                p { class: "summary", "ענית נכון על {vm.score} מתוך {vm.total} שאלות" }
            }

            ul { class: "reviews",
                for review in vm.reviews {
                    ReviewItem { review }
                }
            }

            button {
                id: "results-reset",
                onclick: move |_| on_reset.call(()),
                "חזרה להתחלה"
            }
        }
    }
}

#[component]
fn ReviewItem(review: ReviewVm) -> Element {
    let class = if review.is_correct {
        "card review correct"
    } else {
        "card review wrong"
    };
    let selected = review.selected.unwrap_or_else(|| "לא נבחרה תשובה".to_string());

    rsx! {
        li { class: "{class}",
            p { class: "review-question", "{review.number}. {review.question}" }
            p { "התשובה שלך: {selected}" }
            if !review.is_correct {
                p { class: "review-correct", "התשובה הנכונה: {review.correct}" }
            }
        }
    }
}
