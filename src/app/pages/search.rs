use dioxus::prelude::*;

use crate::app::components::{
    EmptyState, LoadingText, NoticeBanner, Pagination, SearchFilters, SpeechCard, SpeechDialog,
};
use crate::shared::hooks::{use_search_session, use_speech_detail, DetailState};

/// Search view: filter bar, result cards, pagination and the detail dialog.
///
/// All state lives in the two controller hooks; this component only renders
/// their current value and forwards UI events to the named transitions.
#[component]
pub fn Search() -> Element {
    let search = use_search_session();
    let detail = use_speech_detail();

    let session = search.session.read();
    let detail_state = detail.state.read();

    rsx! {
        section { class: "c-search",
            SearchFilters { search }

            if let Some(notice) = session.notice.clone() {
                NoticeBanner { message: notice }
            }

            if !session.loaded && session.in_flight {
                LoadingText { message: "Searching speeches..." }
            } else if !session.loaded {
                EmptyState {
                    title: "No results yet",
                    description: "Type a query or pick a date range, then search.",
                }
            } else if session.results.is_empty() {
                EmptyState {
                    title: "No results",
                    description: "No speeches match the current filters.",
                }
            }

            div { class: "c-search__results",
                for (i, speech) in session.results.iter().enumerate() {
                    SpeechCard {
                        key: "{i}",
                        speech: speech.clone(),
                        on_select: move |speech| detail.open(speech),
                    }
                }
            }

            Pagination {
                page: session.page,
                total_pages: session.total_pages,
                on_select: move |n| search.go_to_page(n),
            }

            if let DetailState::Open { speech, keywords } = &*detail_state {
                SpeechDialog {
                    speech: speech.clone(),
                    keywords: keywords.clone(),
                    on_close: move |_| detail.close(),
                }
            }
        }
    }
}
