use dioxus::prelude::*;
use quiz_core::model::{OptionId, QuestionId};

use crate::vm::{OptionVm, QuestionVm, QuizVm};

#[component]
pub fn QuizView(
    vm: QuizVm,
    submitting: bool,
    on_select: EventHandler<(QuestionId, OptionId)>,
    on_submit: EventHandler<()>,
) -> Element {
    let QuizVm {
        title,
        description,
        questions,
        answered,
        total,
        can_submit,
    } = vm;

    rsx! {
        div { class: "quiz",
            div { class: "card",
                h2 { "{title}" }
                p { class: "description", "{description}" }
                p { class: "progress", "ענית על {answered} מתוך {total} שאלות" }
            }

            for question in questions {
                QuestionCard { question, on_select }
            }

            button {
                id: "quiz-submit",
                disabled: !can_submit || submitting,
                onclick: move |_| on_submit.call(()),
                if submitting { "שולח..." } else { "שלח תשובות" }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_select: EventHandler<(QuestionId, OptionId)>) -> Element {
    rsx! {
        div { class: "card question",
            h3 { "{question.number}. {question.text}" }
            for option in question.options {
                OptionButton {
                    question_id: question.id.clone(),
                    option,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    question_id: QuestionId,
    option: OptionVm,
    on_select: EventHandler<(QuestionId, OptionId)>,
) -> Element {
    let class = if option.selected {
        "option selected"
    } else {
        "option"
    };
    let picked = (question_id, option.id.clone());

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(picked.clone()),
            "{option.text}"
        }
    }
}
