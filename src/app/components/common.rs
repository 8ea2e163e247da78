use dioxus::prelude::*;

// Reusable loading component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Notice banner for surfaced fetch failures and service messages
// (BEM: c-notice). Prior results stay on screen underneath.
#[component]
pub fn NoticeBanner(message: String) -> Element {
    rsx! {
        div { class: "c-notice",
            span { class: "c-notice__icon", "⚠️" }
            p { class: "c-notice__text", "{message}" }
        }
    }
}

// Empty placeholder (BEM: c-empty)
#[component]
pub fn EmptyState(title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty",
            div { class: "c-empty__title", "{title}" }
            div { class: "c-empty__description", "{description}" }
        }
    }
}
