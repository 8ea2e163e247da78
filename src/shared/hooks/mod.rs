// Custom Dioxus hooks, one per session controller.
//
// Each hook wraps a plain state-machine struct in a Signal; the structs own
// every transition and are testable without a renderer. The hooks add only
// the async plumbing (gateway calls spawned onto the UI task queue).
pub mod use_search_session;
pub mod use_speech_detail;
pub mod use_suggestions;
pub mod use_trends;

pub use use_search_session::{use_search_session, SearchSession, UseSearchSession};
pub use use_speech_detail::{use_speech_detail, DetailState, KeywordsStatus, UseSpeechDetail};
pub use use_suggestions::{use_suggestions, SuggestionState, UseSuggestions};
pub use use_trends::{use_trends, TrendsState, UseTrends};
