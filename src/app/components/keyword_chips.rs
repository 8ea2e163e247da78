use dioxus::prelude::*;

/// Chip row for a keyword list (BEM: c-chips).
#[component]
pub fn KeywordChips(words: Vec<String>, #[props(default = false)] small: bool) -> Element {
    let chip_class = if small {
        "c-chips__chip c-chips__chip--small"
    } else {
        "c-chips__chip"
    };

    rsx! {
        div { class: "c-chips",
            for (i, word) in words.iter().enumerate() {
                span { key: "{i}", class: "{chip_class}", "{word}" }
            }
        }
    }
}
