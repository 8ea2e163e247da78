use dioxus::prelude::*;

use crate::app::components::KeywordChips;
use crate::domain::models::Speech;
use crate::shared::hooks::KeywordsStatus;

/// Full-speech dialog (BEM: c-dialog). Shown as soon as a card is selected;
/// the keyword row fills in when its fetch resolves. Clicking the backdrop or
/// the close button closes it.
#[component]
pub fn SpeechDialog(
    speech: Speech,
    keywords: KeywordsStatus,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "c-dialog__backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "c-dialog",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "c-dialog__header",
                    h2 { class: "c-dialog__title",
                        "{speech.member_name} - {speech.party}"
                    }
                    span { class: "c-dialog__date", "{speech.date}" }
                }

                div { class: "c-dialog__body",
                    match &keywords {
                        KeywordsStatus::Pending => rsx! {
                            div { class: "c-dialog__keywords",
                                span { class: "c-dialog__keywords-label", "Top Keywords:" }
                                span { class: "c-dialog__keywords-pending", "…" }
                            }
                        },
                        KeywordsStatus::Loaded(words) => rsx! {
                            div { class: "c-dialog__keywords",
                                span { class: "c-dialog__keywords-label", "Top Keywords:" }
                                KeywordChips { words: words.clone() }
                            }
                        },
                        // Absence of keywords is not an error, the row is
                        // simply not shown.
                        KeywordsStatus::Unavailable => rsx! {},
                    }

                    p { class: "c-dialog__text", "{speech.speech}" }
                }

                footer { class: "c-dialog__footer",
                    button {
                        class: "c-btn c-btn--secondary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
