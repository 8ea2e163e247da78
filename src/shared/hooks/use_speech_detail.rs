use dioxus::prelude::*;

use crate::domain::models::Speech;
use crate::shared::logging::LogOperation;

#[cfg(target_arch = "wasm32")]
use crate::shared::services::ApiService;

/// Keyword panel of the open dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordsStatus {
    /// Fetch in flight; the dialog is already visible.
    Pending,
    /// Non-empty keyword list, in service order.
    Loaded(Vec<String>),
    /// No keywords for this speech. Not an error, just absence of data.
    Unavailable,
}

/// Detail dialog state machine.
///
/// Keywords are fetched lazily per opened speech and discarded on close;
/// reopening the same speech fetches again. A reply is applied only while the
/// dialog still shows the speech identity that triggered the fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Open {
        speech: Speech,
        keywords: KeywordsStatus,
    },
}

impl DetailState {
    /// Opens the dialog immediately, before any keywords arrive. Returns the
    /// identity to fetch keywords for; a speech without one goes straight to
    /// Unavailable and no call is issued.
    pub fn open(&mut self, speech: Speech) -> Option<String> {
        let fetch_id = speech.identity().map(str::to_string);
        let keywords = if fetch_id.is_some() {
            KeywordsStatus::Pending
        } else {
            tracing::warn!(
                operation = LogOperation::SpeechKeywords.as_str(),
                member = %speech.member_name,
                "Speech carries no identity, keywords unavailable"
            );
            KeywordsStatus::Unavailable
        };
        *self = DetailState::Open { speech, keywords };
        fetch_id
    }

    /// Closes the dialog and discards the fetched keywords.
    pub fn close(&mut self) {
        *self = DetailState::Closed;
    }

    /// Applies a keyword reply. Dropped when the dialog closed or moved to a
    /// different speech while the fetch was in flight. An empty list means
    /// the speech simply has no keywords.
    pub fn apply_keywords(&mut self, fetch_id: &str, words: Vec<String>) -> bool {
        let DetailState::Open { speech, keywords } = self else {
            tracing::debug!(
                operation = LogOperation::SpeechKeywords.as_str(),
                fetch_id = fetch_id,
                "Keywords arrived after dialog closed, dropped"
            );
            return false;
        };
        if speech.identity() != Some(fetch_id) {
            tracing::debug!(
                operation = LogOperation::SpeechKeywords.as_str(),
                fetch_id = fetch_id,
                "Keywords arrived for a different speech, dropped"
            );
            return false;
        }
        *keywords = if words.is_empty() {
            KeywordsStatus::Unavailable
        } else {
            KeywordsStatus::Loaded(words)
        };
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open { .. })
    }

    pub fn speech(&self) -> Option<&Speech> {
        match self {
            DetailState::Open { speech, .. } => Some(speech),
            DetailState::Closed => None,
        }
    }

    pub fn keywords(&self) -> Option<&KeywordsStatus> {
        match self {
            DetailState::Open { keywords, .. } => Some(keywords),
            DetailState::Closed => None,
        }
    }
}

/// Detail/modal controller hook handle.
#[derive(Clone, Copy, PartialEq)]
pub struct UseSpeechDetail {
    pub state: Signal<DetailState>,
}

impl UseSpeechDetail {
    /// Opens the dialog for `speech` and starts the keyword fetch when the
    /// speech carries an identity.
    #[cfg(target_arch = "wasm32")]
    pub fn open(&self, speech: Speech) {
        let mut state = self.state;
        let Some(fetch_id) = state.write().open(speech) else {
            return;
        };
        spawn(async move {
            let api = ApiService::new();
            let entries = api.speech_keywords(&fetch_id).await;
            let words: Vec<String> = entries.into_iter().map(|entry| entry.word).collect();
            let count = words.len();
            if state.write().apply_keywords(&fetch_id, words) {
                tracing::debug!(
                    operation = LogOperation::SpeechKeywords.as_str(),
                    keyword_count = count,
                    "Keywords applied"
                );
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(&self, speech: Speech) {
        let mut state = self.state;
        state.write().open(speech);
    }

    pub fn close(&self) {
        let mut state = self.state;
        state.write().close();
    }
}

/// Hook owning the speech-detail dialog lifecycle.
pub fn use_speech_detail() -> UseSpeechDetail {
    let state = use_signal(DetailState::default);
    UseSpeechDetail { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speech(id: Option<&str>, alt_id: Option<&str>) -> Speech {
        Speech {
            id: id.map(str::to_string),
            alt_id: alt_id.map(str::to_string),
            member_name: "Μέλος".to_string(),
            party: "Κόμμα".to_string(),
            date: "01/02/2019".to_string(),
            speech: "...".to_string(),
            keywords: None,
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_open_with_identity_starts_pending() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(Some("abc"), None));
        assert_eq!(fetch_id.as_deref(), Some("abc"));
        assert_eq!(state.keywords(), Some(&KeywordsStatus::Pending));
        assert!(state.is_open());
    }

    #[test]
    fn test_open_falls_back_to_alternate_identity() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(None, Some("es-raw")));
        assert_eq!(fetch_id.as_deref(), Some("es-raw"));
    }

    #[test]
    fn test_open_without_identity_is_unavailable_and_fetchless() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(None, None));
        assert!(fetch_id.is_none());
        assert_eq!(state.keywords(), Some(&KeywordsStatus::Unavailable));
    }

    #[test]
    fn test_keywords_apply_while_same_speech_open() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(Some("abc"), None)).unwrap();
        assert!(state.apply_keywords(&fetch_id, words(&["ανάπτυξη", "κρίση"])));
        assert_eq!(
            state.keywords(),
            Some(&KeywordsStatus::Loaded(words(&["ανάπτυξη", "κρίση"])))
        );
    }

    #[test]
    fn test_empty_reply_means_unavailable() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(Some("abc"), None)).unwrap();
        assert!(state.apply_keywords(&fetch_id, Vec::new()));
        assert_eq!(state.keywords(), Some(&KeywordsStatus::Unavailable));
    }

    #[test]
    fn test_reply_after_close_is_dropped() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(Some("abc"), None)).unwrap();
        state.close();
        assert!(!state.apply_keywords(&fetch_id, words(&["ανάπτυξη"])));
        assert!(!state.is_open());
    }

    #[test]
    fn test_reply_for_previous_speech_is_dropped() {
        let mut state = DetailState::default();
        let first_id = state.open(speech(Some("first"), None)).unwrap();
        let _second_id = state.open(speech(Some("second"), None)).unwrap();

        assert!(!state.apply_keywords(&first_id, words(&["ανάπτυξη"])));
        assert_eq!(state.keywords(), Some(&KeywordsStatus::Pending));
    }

    #[test]
    fn test_reopen_fetches_again() {
        let mut state = DetailState::default();
        let fetch_id = state.open(speech(Some("abc"), None)).unwrap();
        state.apply_keywords(&fetch_id, words(&["ανάπτυξη"]));
        state.close();

        // Keywords are not cached across closes.
        let fetch_id = state.open(speech(Some("abc"), None));
        assert_eq!(fetch_id.as_deref(), Some("abc"));
        assert_eq!(state.keywords(), Some(&KeywordsStatus::Pending));
    }
}
