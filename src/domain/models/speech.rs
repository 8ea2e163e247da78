use serde::{Deserialize, Serialize};

/// One parliamentary speech as returned by the search endpoint.
///
/// Identity is messy on the wire: depending on the service build a hit may
/// carry `id`, the raw Elasticsearch `_id`, or neither. Immutable once
/// received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speech {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,
    pub member_name: String,
    pub party: String,
    /// Sitting date, kept in the service's own formatting.
    pub date: String,
    /// Full speech text.
    pub speech: String,
    /// Present when the index has per-speech keywords precomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<serde_json::Value>,
}

impl Speech {
    /// The identity used for keyword lookups: `id`, falling back to `_id`.
    pub fn identity(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.alt_id.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn has_keywords(&self) -> bool {
        matches!(&self.keywords, Some(serde_json::Value::Array(list)) if !list.is_empty())
    }
}

/// One page of search results. Produced atomically per successful call and
/// replaces the previous page wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResultPage {
    pub results: Vec<Speech>,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: Option<u64>,
}
