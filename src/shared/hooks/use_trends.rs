use dioxus::prelude::*;

use crate::domain::models::{EntitySelector, TrendEntry};
use crate::shared::errors::ApiError;
use crate::shared::logging::{self, LogOperation};

#[cfg(target_arch = "wasm32")]
use crate::shared::services::ApiService;

/// Trend display state machine.
///
/// Entries are kept in service order (assumed chronological); no client-side
/// re-sorting. Fetches use the same token discipline as search, and a failed
/// or service-rejected fetch clears the display instead of leaving entries
/// that belong to a previous selector on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendsState {
    pub entries: Vec<TrendEntry>,
    pub notice: Option<String>,
    pub in_flight: bool,
    latest_token: u64,
}

impl TrendsState {
    /// Starts a fetch for `selector`. Blank/whitespace-only names never
    /// reach the network.
    pub fn begin_fetch(&mut self, selector: &EntitySelector) -> Option<u64> {
        if selector.name.trim().is_empty() {
            return None;
        }
        self.latest_token += 1;
        self.in_flight = true;
        self.notice = None;
        Some(self.latest_token)
    }

    /// Applies a successful reply; stale tokens are dropped.
    pub fn apply_entries(&mut self, token: u64, entries: Vec<TrendEntry>) -> bool {
        if token != self.latest_token {
            logging::log_stale_response_dropped(LogOperation::Trends, token, self.latest_token);
            return false;
        }
        self.in_flight = false;
        self.entries = entries;
        true
    }

    /// Surfaces a failure. The display is cleared rather than kept: whatever
    /// was shown belongs to an earlier selector and would read as fresh data.
    pub fn apply_error(&mut self, token: u64, error: &ApiError) -> bool {
        if token != self.latest_token {
            logging::log_stale_response_dropped(LogOperation::Trends, token, self.latest_token);
            return false;
        }
        self.in_flight = false;
        self.entries.clear();
        self.notice = Some(error.to_string());
        true
    }
}

/// Trends controller hook handle.
#[derive(Clone, Copy, PartialEq)]
pub struct UseTrends {
    pub state: Signal<TrendsState>,
}

impl UseTrends {
    /// Fetches yearly keyword aggregates for `selector`.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, selector: EntitySelector) {
        let mut state = self.state;
        let Some(token) = state.write().begin_fetch(&selector) else {
            return;
        };
        logging::log_request_issued(LogOperation::Trends, token);
        spawn(async move {
            let api = ApiService::new();
            match api.entity_trends(selector.entity_type, &selector.name).await {
                Ok(entries) => {
                    let count = entries.len();
                    if state.write().apply_entries(token, entries) {
                        logging::log_response_applied(LogOperation::Trends, token, count);
                    }
                }
                Err(e) => {
                    logging::log_request_failed(LogOperation::Trends, token, &e);
                    state.write().apply_error(token, &e);
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, selector: EntitySelector) {
        let mut state = self.state;
        state.write().begin_fetch(&selector);
    }
}

/// Hook owning the per-entity keyword-trend display.
pub fn use_trends() -> UseTrends {
    let state = use_signal(TrendsState::default);
    UseTrends { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EntityType;

    fn selector(name: &str) -> EntitySelector {
        EntitySelector {
            entity_type: EntityType::Party,
            name: name.to_string(),
        }
    }

    fn entries(years: &[i32]) -> Vec<TrendEntry> {
        years
            .iter()
            .map(|year| TrendEntry {
                year: *year,
                keywords: vec!["ανάπτυξη".to_string()],
            })
            .collect()
    }

    #[test]
    fn test_blank_name_is_a_no_op() {
        let mut state = TrendsState::default();
        assert!(state.begin_fetch(&selector("")).is_none());
        assert!(state.begin_fetch(&selector("   ")).is_none());
        assert!(!state.in_flight);
    }

    #[test]
    fn test_success_replaces_display_in_service_order() {
        let mut state = TrendsState::default();
        let token = state.begin_fetch(&selector("ΠΑΣΟΚ")).unwrap();
        assert!(state.apply_entries(token, entries(&[2019, 2015, 2020])));
        let years: Vec<i32> = state.entries.iter().map(|entry| entry.year).collect();
        assert_eq!(years, vec![2019, 2015, 2020]);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_application_error_clears_display_and_shows_message() {
        let mut state = TrendsState::default();
        let token = state.begin_fetch(&selector("ΠΑΣΟΚ")).unwrap();
        state.apply_entries(token, entries(&[2019]));

        let token = state.begin_fetch(&selector("Ανύπαρκτος")).unwrap();
        state.apply_error(token, &ApiError::Application("Entity not found".to_string()));

        assert!(state.entries.is_empty());
        assert_eq!(state.notice.as_deref(), Some("Entity not found"));
    }

    #[test]
    fn test_stale_reply_is_dropped() {
        let mut state = TrendsState::default();
        let stale = state.begin_fetch(&selector("ΠΑΣΟΚ")).unwrap();
        let fresh = state.begin_fetch(&selector("ΝΔ")).unwrap();

        assert!(state.apply_entries(fresh, entries(&[2020])));
        assert!(!state.apply_entries(stale, entries(&[2019])));
        assert_eq!(state.entries[0].year, 2020);
    }

    #[test]
    fn test_new_fetch_clears_previous_notice() {
        let mut state = TrendsState::default();
        let token = state.begin_fetch(&selector("Ανύπαρκτος")).unwrap();
        state.apply_error(token, &ApiError::Application("Entity not found".to_string()));

        state.begin_fetch(&selector("ΠΑΣΟΚ")).unwrap();
        assert!(state.notice.is_none());
        assert!(state.in_flight);
    }
}
