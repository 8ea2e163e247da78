use dioxus::prelude::*;

use crate::domain::models::Speech;

/// Result card for one speech (BEM: c-speech-card). Clicking anywhere on the
/// card opens the detail dialog.
#[component]
pub fn SpeechCard(speech: Speech, on_select: EventHandler<Speech>) -> Element {
    let speech_for_select = speech.clone();

    rsx! {
        article {
            class: "c-speech-card",
            onclick: move |_| on_select.call(speech_for_select.clone()),
            div { class: "c-speech-card__header",
                h3 { class: "c-speech-card__member", "{speech.member_name}" }
                span { class: "c-speech-card__party", "{speech.party}" }
                if speech.has_keywords() {
                    span {
                        class: "c-speech-card__kw-flag",
                        title: "Keywords available",
                        "🔑"
                    }
                }
            }
            span { class: "c-speech-card__date", "{speech.date}" }
            // Full text, clamped to three lines by the stylesheet.
            p { class: "c-speech-card__excerpt", "{speech.speech}" }
        }
    }
}
