//! Client configuration.

use std::time::Duration;

use crate::error::{Result, StudioError};

/// Default backend address when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1231";

/// Environment variable overriding the backend address.
pub const BASE_URL_ENV: &str = "SOUNDSTAGE_BASE_URL";

/// Connection settings for [`crate::client::StudioClient`].
#[derive(Debug, Clone)]
pub struct StudioConfig {
    base_url: String,
    request_timeout: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl StudioConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            request_timeout: Duration::from_secs(120),
        }
    }

    /// Read configuration from the environment, loading `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Audio rendering can run for minutes; CLI callers bump this.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Build the HTTP client used for all requests.
    pub fn build_http(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|err| StudioError::Configuration(format!("failed to build HTTP client: {err}")))
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = StudioConfig::new("http://localhost:1231/");
        assert_eq!(config.base_url(), "http://localhost:1231");
    }
}
