//! Persisted UI preferences.
//!
//! Two independent blobs survive across sessions: the LLM provider settings
//! and the audio-effect settings. Everything else the session touches is
//! in-memory only.

pub mod store;

pub use store::{FilePrefStore, PrefStore};

use serde::{Deserialize, Serialize};

use crate::types::AudioEffects;

/// Blob name for [`LlmConfig`].
pub const LLM_BLOB: &str = "llm_config";
/// Blob name for [`AudioEffects`].
pub const AUDIO_BLOB: &str = "audio_config";

/// LLM provider settings, sent as the `model_config` sub-payload with
/// persona and dialog generation requests.
///
/// Per-field defaults apply whenever a saved blob is absent or predates a
/// field: a missing provider means the local-inference default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model_name: String,
    #[serde(default = "default_region")]
    pub region_name: String,
    #[serde(default)]
    pub aws_bearer_token: String,
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "llama2".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model_name: default_model(),
            region_name: default_region(),
            aws_bearer_token: String::new(),
        }
    }
}

impl LlmConfig {
    /// Whether the AWS-specific fields apply to the selected provider.
    /// Callers re-run this after loading a saved blob, the same as after a
    /// user change, so dependent fields show up correctly.
    pub fn needs_aws_fields(&self) -> bool {
        self.provider == "amazon"
    }
}

/// Load and deserialize a named blob, `None` when nothing is stored.
pub fn load_blob<T: serde::de::DeserializeOwned>(
    store: &dyn PrefStore,
    name: &str,
) -> crate::error::Result<Option<T>> {
    match store.load_raw(name)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and persist a named blob.
pub fn save_blob<T: Serialize>(
    store: &dyn PrefStore,
    name: &str,
    value: &T,
) -> crate::error::Result<()> {
    store.save_raw(name, &serde_json::to_string_pretty(value)?)
}

/// Load the LLM blob, falling back to defaults when nothing is stored.
pub fn load_llm(store: &dyn PrefStore) -> crate::error::Result<LlmConfig> {
    Ok(load_blob(store, LLM_BLOB)?.unwrap_or_default())
}

/// Load the audio blob, falling back to defaults when nothing is stored.
pub fn load_audio(store: &dyn PrefStore) -> crate::error::Result<AudioEffects> {
    Ok(load_blob(store, AUDIO_BLOB)?.unwrap_or_default())
}

/// Persist the LLM blob. Called on every relevant change, not on exit.
pub fn save_llm(store: &dyn PrefStore, config: &LlmConfig) -> crate::error::Result<()> {
    save_blob(store, LLM_BLOB, config)
}

/// Persist the audio blob.
pub fn save_audio(store: &dyn PrefStore, effects: &AudioEffects) -> crate::error::Result<()> {
    save_blob(store, AUDIO_BLOB, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn llm_config_defaults_missing_fields() {
        let config: LlmConfig = serde_json::from_value(json!({"provider": "amazon"})).unwrap();
        assert_eq!(config.model_name, "llama2");
        assert_eq!(config.region_name, "us-east-1");
        assert!(config.needs_aws_fields());

        let empty: LlmConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.provider, "ollama");
        assert!(!empty.needs_aws_fields());
    }
}
