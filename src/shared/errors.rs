use thiserror::Error;

/// Failure surface of the remote search/keyword service.
///
/// Absence of supplementary data (speech keywords, suggestions) is NOT an
/// error: those paths degrade to empty values and never produce an `ApiError`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport/connectivity failure before any response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the service.
    #[error("Server error: HTTP {status} {status_text}")]
    Server { status: u16, status_text: String },

    /// Success response carrying a service-signaled semantic error,
    /// e.g. "Entity not found" on a trend query.
    #[error("{0}")]
    Application(String),

    /// Response body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
