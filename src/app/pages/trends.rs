use dioxus::prelude::*;

use crate::app::components::{EmptyState, EntityPicker, LoadingText, NoticeBanner, TrendCard};
use crate::shared::hooks::{use_suggestions, use_trends};

/// Keyword-trends view: entity picker, fetch button and one card per year.
#[component]
pub fn Trends() -> Element {
    let suggestions = use_suggestions();
    let trends = use_trends();

    let trends_state = trends.state.read();

    rsx! {
        section { class: "c-trends",
            h2 { class: "c-trends__title", "Keyword Trends" }

            div { class: "c-trends__controls",
                EntityPicker { suggestions }

                button {
                    class: "c-btn c-btn--primary",
                    disabled: trends_state.in_flight,
                    onclick: move |_| {
                        let selector = suggestions.state.read().selector();
                        trends.fetch(selector);
                    },
                    if trends_state.in_flight { "Loading..." } else { "Show Trends" }
                }
            }

            if let Some(notice) = trends_state.notice.clone() {
                NoticeBanner { message: notice }
            }

            if trends_state.in_flight {
                LoadingText { message: "Loading trends..." }
            } else if trends_state.entries.is_empty() && trends_state.notice.is_none() {
                EmptyState {
                    title: "No trends yet",
                    description: "Pick a party or member and show its keyword trends.",
                }
            }

            div { class: "c-trends__results",
                for entry in trends_state.entries.iter() {
                    TrendCard { key: "{entry.year}", entry: entry.clone() }
                }
            }
        }
    }
}
