//! Structured logging for the session controllers.
//!
//! Uses tracing structured fields with a common `operation` key so the four
//! fetch paths can be filtered apart in the console.

use crate::shared::errors::ApiError;

/// Log operations, one per gateway call site.
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Search,
    Autocomplete,
    SpeechKeywords,
    Trends,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Search => "search",
            LogOperation::Autocomplete => "autocomplete",
            LogOperation::SpeechKeywords => "speech_keywords",
            LogOperation::Trends => "trends",
        }
    }
}

/// Log an issued request together with its ordering token.
pub fn log_request_issued(op: LogOperation, token: u64) {
    tracing::debug!(
        operation = op.as_str(),
        token = token,
        "Request issued"
    );
}

/// Log a response that was applied to session state.
pub fn log_response_applied(op: LogOperation, token: u64, item_count: usize) {
    tracing::debug!(
        operation = op.as_str(),
        token = token,
        item_count = item_count,
        "Response applied"
    );
}

/// Log a response dropped because a newer request superseded it.
pub fn log_stale_response_dropped(op: LogOperation, token: u64, current: u64) {
    tracing::debug!(
        operation = op.as_str(),
        token = token,
        current_token = current,
        "Stale response dropped"
    );
}

/// Log a failure that is surfaced to the user.
pub fn log_request_failed(op: LogOperation, token: u64, error: &ApiError) {
    tracing::warn!(
        operation = op.as_str(),
        token = token,
        error = %error,
        "Request failed"
    );
}

/// Log a best-effort path degrading to empty data.
pub fn log_degraded_to_empty(op: LogOperation, error: &ApiError) {
    tracing::debug!(
        operation = op.as_str(),
        error = %error,
        "Degraded to empty result"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::Autocomplete.as_str(), "autocomplete");
        assert_eq!(LogOperation::SpeechKeywords.as_str(), "speech_keywords");
        assert_eq!(LogOperation::Trends.as_str(), "trends");
    }
}
