use dioxus::prelude::*;

use crate::domain::models::{EntitySelector, EntityType};
use crate::shared::constants::MIN_SUGGESTION_PREFIX;
use crate::shared::logging::{self, LogOperation};

#[cfg(target_arch = "wasm32")]
use crate::shared::constants::SUGGESTION_DEBOUNCE_MS;
#[cfg(target_arch = "wasm32")]
use crate::shared::services::ApiService;

/// Autocomplete candidate state for the entity-name input.
///
/// Lookups fire per edit (debounced on wasm) and network replies can land in
/// any order, so every issued lookup gets a monotonic sequence number and a
/// reply is applied only when its number is not older than the last applied
/// one. Shortening the prefix below the minimum or switching the entity type
/// clears the list synchronously and invalidates everything still in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionState {
    pub entity_type: EntityType,
    pub name: String,
    pub options: Vec<String>,
    next_seq: u64,
    applied_seq: u64,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self {
            entity_type: EntityType::Party,
            name: String::new(),
            options: Vec::new(),
            next_seq: 0,
            applied_seq: 0,
        }
    }
}

impl SuggestionState {
    /// Records an edit. Returns the sequence number of the lookup now owed,
    /// or None when the prefix is too short to query.
    pub fn on_input(&mut self, text: &str) -> Option<u64> {
        self.name = text.to_string();
        if text.chars().count() < MIN_SUGGESTION_PREFIX {
            self.options.clear();
            // Anything still in flight belongs to a longer, older prefix.
            self.applied_seq = self.next_seq + 1;
            return None;
        }
        self.next_seq += 1;
        Some(self.next_seq)
    }

    /// Switching entity kinds invalidates candidates of the other kind,
    /// including replies still in flight.
    pub fn set_entity_type(&mut self, entity_type: EntityType) {
        if self.entity_type == entity_type {
            return;
        }
        self.entity_type = entity_type;
        self.options.clear();
        self.applied_seq = self.next_seq + 1;
    }

    /// The user picked a candidate; candidates for the old prefix are done.
    pub fn accept(&mut self, option: &str) {
        self.name = option.to_string();
        self.options.clear();
        self.applied_seq = self.next_seq + 1;
    }

    /// True while `seq` is still the newest issued lookup. Used to skip the
    /// network entirely when a debounced edit has already been superseded.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.next_seq && seq >= self.applied_seq
    }

    /// Applies a reply unless an out-of-order newer one already landed.
    pub fn apply(&mut self, seq: u64, options: Vec<String>) -> bool {
        if seq < self.applied_seq {
            logging::log_stale_response_dropped(LogOperation::Autocomplete, seq, self.applied_seq);
            return false;
        }
        self.applied_seq = seq;
        self.options = options;
        true
    }

    pub fn selector(&self) -> EntitySelector {
        EntitySelector {
            entity_type: self.entity_type,
            name: self.name.clone(),
        }
    }
}

/// Suggestion controller hook handle.
#[derive(Clone, Copy, PartialEq)]
pub struct UseSuggestions {
    pub state: Signal<SuggestionState>,
}

impl UseSuggestions {
    /// Handles one keystroke: update the prefix, then (after the debounce
    /// window) fetch candidates unless a newer edit superseded this one.
    #[cfg(target_arch = "wasm32")]
    pub fn on_input(&self, text: String) {
        let mut state = self.state;
        let Some(seq) = state.write().on_input(&text) else {
            return;
        };
        let entity_type = state.read().entity_type;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(SUGGESTION_DEBOUNCE_MS).await;
            if !state.read().is_latest(seq) {
                return;
            }
            logging::log_request_issued(LogOperation::Autocomplete, seq);
            let api = ApiService::new();
            let options = api.autocomplete(entity_type, &text).await;
            let count = options.len();
            if state.write().apply(seq, options) {
                logging::log_response_applied(LogOperation::Autocomplete, seq, count);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn on_input(&self, text: String) {
        let mut state = self.state;
        state.write().on_input(&text);
    }

    pub fn set_entity_type(&self, entity_type: EntityType) {
        let mut state = self.state;
        state.write().set_entity_type(entity_type);
    }

    pub fn accept(&self, option: String) {
        let mut state = self.state;
        state.write().accept(&option);
    }
}

/// Hook owning the autocomplete candidates for the trends entity input.
pub fn use_suggestions() -> UseSuggestions {
    let state = use_signal(SuggestionState::default);
    UseSuggestions { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_prefix_clears_without_issuing_lookup() {
        let mut state = SuggestionState::default();
        assert!(state.on_input("ΠΑ").is_some());
        state.apply(1, options(&["ΠΑΣΟΚ"]));
        assert_eq!(state.options.len(), 1);

        assert!(state.on_input("Π").is_none());
        assert!(state.options.is_empty());
    }

    #[test]
    fn test_clearing_prefix_invalidates_in_flight_reply() {
        let mut state = SuggestionState::default();
        let seq = state.on_input("ΠΑ").unwrap();
        state.on_input("");
        // The lookup for "ΠΑ" resolves after the clear and must not
        // resurrect the list.
        assert!(!state.apply(seq, options(&["ΠΑΣΟΚ"])));
        assert!(state.options.is_empty());
    }

    #[test]
    fn test_out_of_order_reply_is_dropped() {
        let mut state = SuggestionState::default();
        let seq1 = state.on_input("Πα").unwrap();
        let seq2 = state.on_input("Παπ").unwrap();

        assert!(state.apply(seq2, options(&["Παπαδόπουλος"])));
        assert!(!state.apply(seq1, options(&["Παππάς", "Παπαδόπουλος"])));
        assert_eq!(state.options, options(&["Παπαδόπουλος"]));
    }

    #[test]
    fn test_equal_seq_reply_still_applies() {
        // The guard is >=, not >: a re-delivery of the applied lookup wins.
        let mut state = SuggestionState::default();
        let seq = state.on_input("Πα").unwrap();
        assert!(state.apply(seq, options(&["Παππάς"])));
        assert!(state.apply(seq, options(&["Παππάς", "Παυλίδης"])));
    }

    #[test]
    fn test_entity_type_switch_clears_and_invalidates() {
        let mut state = SuggestionState::default();
        let seq = state.on_input("ΠΑ").unwrap();
        state.apply(seq, options(&["ΠΑΣΟΚ"]));

        state.set_entity_type(EntityType::Member);
        assert!(state.options.is_empty());

        // A party reply still in flight may not apply to member suggestions.
        assert!(!state.apply(seq, options(&["ΠΑΣΟΚ"])));

        // A fresh lookup after the switch works normally.
        let seq2 = state.on_input("Παπ").unwrap();
        assert!(state.apply(seq2, options(&["Παπαδόπουλος"])));
    }

    #[test]
    fn test_accept_fills_name_and_closes_list() {
        let mut state = SuggestionState::default();
        let seq = state.on_input("ΠΑ").unwrap();
        state.apply(seq, options(&["ΠΑΣΟΚ"]));
        state.accept("ΠΑΣΟΚ");
        assert_eq!(state.name, "ΠΑΣΟΚ");
        assert!(state.options.is_empty());
        assert_eq!(state.selector().name, "ΠΑΣΟΚ");
    }

    #[test]
    fn test_is_latest_tracks_newest_edit() {
        let mut state = SuggestionState::default();
        let seq1 = state.on_input("Πα").unwrap();
        assert!(state.is_latest(seq1));
        let seq2 = state.on_input("Παπ").unwrap();
        assert!(!state.is_latest(seq1));
        assert!(state.is_latest(seq2));
    }
}
