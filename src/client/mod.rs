//! Typed HTTP client for the studio backend.
//!
//! One method per endpoint, grouped by resource in the submodules. All
//! request/response bodies are JSON; every non-2xx response is decoded as
//! `{"error": ...}` when possible and surfaced verbatim. Nothing here
//! retries: a failed request is reported once and the operation ends.

mod dialogs;
mod personas;
mod rooms;
mod voices;

pub use dialogs::CreateDialogRequest;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::StudioConfig;
use crate::error::{Result, StudioError};

/// Client handle for the studio backend. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct StudioClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape the backend uses for all failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl StudioClient {
    /// Build a client from configuration.
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Ok(Self {
            http: config.build_http()?,
            base_url: config.base_url().to_string(),
        })
    }

    /// Build a client from the environment (`SOUNDSTAGE_BASE_URL`, `.env`).
    pub fn from_env() -> Result<Self> {
        Self::new(&StudioConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(%path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(%path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST with an empty body (trigger-style endpoints).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(%path, "POST");
        let response = self.http.post(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!(%path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::status_error(status.as_u16(), &response.text().await?))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(StudioError::Serialization)
    }

    /// Turn a non-2xx body into an API error, preferring the backend's
    /// structured `error` field over the raw body.
    fn status_error(status: u16, body: &str) -> StudioError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|parsed| parsed.error)
            .unwrap_or_else(|_| body.to_string());
        tracing::debug!(status, %message, "request failed");
        StudioError::api(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_structured_message() {
        let err = StudioClient::status_error(404, r#"{"error":"Room not found"}"#);
        assert!(matches!(
            err,
            StudioError::Api { status: 404, ref message } if message == "Room not found"
        ));
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let err = StudioClient::status_error(502, "Bad Gateway");
        assert!(matches!(
            err,
            StudioError::Api { status: 502, ref message } if message == "Bad Gateway"
        ));
    }
}
