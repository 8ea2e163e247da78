use dioxus::prelude::*;

use crate::app::components::KeywordChips;
use crate::domain::models::TrendEntry;

/// One yearly trend card (BEM: c-trend-card): the year as the card title,
/// one chip per keyword, in service order.
#[component]
pub fn TrendCard(entry: TrendEntry) -> Element {
    rsx! {
        div { class: "c-trend-card",
            h3 { class: "c-trend-card__year", "{entry.year}" }
            KeywordChips { words: entry.keywords.clone(), small: true }
        }
    }
}
