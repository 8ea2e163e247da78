//! Remote Data Gateway for the speech search/keyword service.
//!
//! One method per read endpoint, a single request/response cycle each, no
//! retries. Transport runs through `reqwasm` on wasm32; URL construction is
//! target-independent so it can be exercised without a browser.

#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::domain::models::{EntityType, SearchQuery};
#[cfg(target_arch = "wasm32")]
use crate::shared::constants::MIN_SUGGESTION_PREFIX;

#[cfg(target_arch = "wasm32")]
use crate::domain::models::{KeywordEntry, SearchResultPage, SpeechKeywordsResponse, TrendEntry, TrendsResponse};
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::ApiError;
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::ApiResult;
#[cfg(target_arch = "wasm32")]
use crate::shared::logging::{self, LogOperation};

/// Date format the service expects for `from_date`/`to_date`.
const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

// API Service for centralized HTTP requests
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base.clone(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// `GET /search` URL. Unset filters are omitted entirely; dates go out
    /// as dd/MM/yyyy.
    fn search_url(&self, query: &SearchQuery) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(text) = query.text.as_deref().filter(|t| !t.is_empty()) {
            params.push(("q", text.to_string()));
        }
        if let Some(from) = query.from_date {
            params.push(("from_date", from.format(WIRE_DATE_FORMAT).to_string()));
        }
        if let Some(to) = query.to_date {
            params.push(("to_date", to.format(WIRE_DATE_FORMAT).to_string()));
        }
        params.push(("page", query.page.to_string()));
        params.push(("size", query.page_size.to_string()));
        format!("{}/search?{}", self.base_url, encode_query(&params))
    }

    fn autocomplete_url(&self, entity_type: EntityType, prefix: &str) -> String {
        let params = [
            ("entity_type", entity_type.as_str().to_string()),
            ("q", prefix.to_string()),
        ];
        format!("{}/autocomplete?{}", self.base_url, encode_query(&params))
    }

    /// Speech identities come straight from the index and may contain
    /// anything, so the path segment is escaped.
    fn speech_keywords_url(&self, speech_id: &str) -> String {
        format!(
            "{}/keywords/speech/{}",
            self.base_url,
            urlencoding::encode(speech_id)
        )
    }

    fn trends_url(&self, entity_type: EntityType, name: &str) -> String {
        let params = [
            ("entity_type", entity_type.as_str().to_string()),
            ("name", name.to_string()),
        ];
        format!("{}/keywords/trends?{}", self.base_url, encode_query(&params))
    }
}

fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(target_arch = "wasm32")]
impl ApiService {
    // Generic GET request
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Full-text/date search. Errors are surfaced, not retried.
    pub async fn search(&self, query: &SearchQuery) -> ApiResult<SearchResultPage> {
        self.get_json(&self.search_url(query)).await
    }

    /// Entity-name candidates for a prefix. Best-effort: prefixes below the
    /// minimum length never reach the network, and any failure degrades to an
    /// empty list rather than blocking the user.
    pub async fn autocomplete(&self, entity_type: EntityType, prefix: &str) -> Vec<String> {
        if prefix.chars().count() < MIN_SUGGESTION_PREFIX {
            return Vec::new();
        }
        match self
            .get_json::<Vec<String>>(&self.autocomplete_url(entity_type, prefix))
            .await
        {
            Ok(options) => options,
            Err(e) => {
                logging::log_degraded_to_empty(LogOperation::Autocomplete, &e);
                Vec::new()
            }
        }
    }

    /// Top keywords of one speech. Best-effort: an empty id issues no call,
    /// and failures degrade to an empty list.
    pub async fn speech_keywords(&self, speech_id: &str) -> Vec<KeywordEntry> {
        if speech_id.is_empty() {
            return Vec::new();
        }
        match self
            .get_json::<SpeechKeywordsResponse>(&self.speech_keywords_url(speech_id))
            .await
        {
            Ok(body) => body.keywords,
            Err(e) => {
                logging::log_degraded_to_empty(LogOperation::SpeechKeywords, &e);
                Vec::new()
            }
        }
    }

    /// Yearly keyword aggregates for one entity. A 2xx body carrying an
    /// `error`/`message` notice surfaces as `ApiError::Application`.
    pub async fn entity_trends(
        &self,
        entity_type: EntityType,
        name: &str,
    ) -> ApiResult<Vec<TrendEntry>> {
        let response: TrendsResponse = self.get_json(&self.trends_url(entity_type, name)).await?;
        response.into_result().map_err(ApiError::Application)
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn api() -> ApiService {
        ApiService::with_base_url("http://api.test".to_string())
    }

    #[test]
    fn test_search_url_omits_unset_filters() {
        let query = SearchQuery::default();
        assert_eq!(api().search_url(&query), "http://api.test/search?page=1&size=10");
    }

    #[test]
    fn test_search_url_serializes_dates_as_dd_mm_yyyy() {
        let mut query = SearchQuery::default();
        query.set_text("οικονομία");
        query.set_from_date(NaiveDate::from_ymd_opt(2019, 3, 5));
        query.set_to_date(NaiveDate::from_ymd_opt(2019, 11, 20));
        let url = api().search_url(&query);
        assert!(url.contains("from_date=05%2F03%2F2019"), "{url}");
        assert!(url.contains("to_date=20%2F11%2F2019"), "{url}");
        assert!(url.contains("q=%CE%BF%CE%B9"), "{url}");
    }

    #[test]
    fn test_search_url_carries_requested_page() {
        let mut query = SearchQuery::default();
        query.page = 3;
        assert!(api().search_url(&query).ends_with("page=3&size=10"));
    }

    #[test]
    fn test_speech_keywords_url_escapes_identity() {
        let url = api().speech_keywords_url("a b/c");
        assert_eq!(url, "http://api.test/keywords/speech/a%20b%2Fc");
    }

    #[test]
    fn test_autocomplete_url_encodes_prefix() {
        let url = api().autocomplete_url(EntityType::Member, "Παπ");
        assert!(url.starts_with("http://api.test/autocomplete?entity_type=member&q="));
    }

    #[test]
    fn test_trends_url_carries_entity_params() {
        let url = api().trends_url(EntityType::Party, "ΠΑΣΟΚ");
        assert!(url.starts_with("http://api.test/keywords/trends?entity_type=party&name="));
    }
}
