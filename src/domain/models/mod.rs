// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod keywords;
pub mod query;
pub mod speech;
pub mod trends;

pub use keywords::{KeywordEntry, SpeechKeywordsResponse};
pub use query::{SearchQuery, PAGE_SIZE};
pub use speech::{SearchResultPage, Speech};
pub use trends::{EntitySelector, EntityType, TrendEntry, TrendsResponse};
