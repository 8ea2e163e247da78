//! Client configuration.
//!
//! The search service origin defaults to the local FastAPI dev server and can
//! be overridden at build time with `SPEECH_API_BASE`.

use once_cell::sync::Lazy;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin of the speech search/keyword service, without trailing slash.
    pub api_base: String,
}

impl AppConfig {
    fn resolve() -> Self {
        let base = option_env!("SPEECH_API_BASE").unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: base.trim_end_matches('/').to_string(),
        }
    }
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::resolve);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        let config = AppConfig::resolve();
        assert!(!config.api_base.ends_with('/'));
        assert!(config.api_base.starts_with("http"));
    }
}
