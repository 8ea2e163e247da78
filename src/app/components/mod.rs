pub mod common;
pub mod entity_picker;
pub mod keyword_chips;
pub mod pagination;
pub mod search_filters;
pub mod speech_card;
pub mod speech_dialog;
pub mod trend_card;

pub use common::{EmptyState, LoadingText, NoticeBanner};
pub use entity_picker::EntityPicker;
pub use keyword_chips::KeywordChips;
pub use pagination::Pagination;
pub use search_filters::SearchFilters;
pub use speech_card::SpeechCard;
pub use speech_dialog::SpeechDialog;
pub use trend_card::TrendCard;
