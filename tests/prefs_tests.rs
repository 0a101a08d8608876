//! Preference persistence tests.

use pretty_assertions::assert_eq;
use soundstage::prefs::{self, FilePrefStore, LlmConfig, PrefStore};
use soundstage::types::AudioEffects;

#[test]
fn missing_blobs_yield_documented_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePrefStore::new(dir.path());

    let llm = prefs::load_llm(&store).unwrap();
    assert_eq!(llm.provider, "ollama");
    assert_eq!(llm.model_name, "llama2");
    assert_eq!(llm.region_name, "us-east-1");
    assert_eq!(llm.aws_bearer_token, "");

    let audio = prefs::load_audio(&store).unwrap();
    assert!(audio.ray_tracing);
    assert!(audio.air_absorption);
    assert_eq!(audio.background_volume, 1.0);
}

#[test]
fn saved_llm_blob_round_trips_and_reapplies_visibility() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePrefStore::new(dir.path());

    let config = LlmConfig {
        provider: "amazon".to_string(),
        model_name: "anthropic.claude-3".to_string(),
        region_name: "eu-west-1".to_string(),
        aws_bearer_token: "token".to_string(),
    };
    prefs::save_llm(&store, &config).unwrap();

    let loaded = prefs::load_llm(&store).unwrap();
    assert_eq!(loaded, config);
    // Loading must re-trigger the provider-dependent field logic.
    assert!(loaded.needs_aws_fields());
}

#[test]
fn partial_blob_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePrefStore::new(dir.path());
    store
        .save_raw(prefs::LLM_BLOB, r#"{"provider": "openai"}"#)
        .unwrap();

    let llm = prefs::load_llm(&store).unwrap();
    assert_eq!(llm.provider, "openai");
    assert_eq!(llm.model_name, "llama2");
    assert!(!llm.needs_aws_fields());
}

#[test]
fn explicit_false_toggle_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePrefStore::new(dir.path());

    let audio = AudioEffects {
        ray_tracing: false,
        background_effect: Some("hospital_hum".to_string()),
        ..AudioEffects::default()
    };
    prefs::save_audio(&store, &audio).unwrap();

    let loaded = prefs::load_audio(&store).unwrap();
    assert!(!loaded.ray_tracing);
    assert!(loaded.air_absorption);
    assert_eq!(loaded.background_effect.as_deref(), Some("hospital_hum"));
}

#[test]
fn blobs_are_independent_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePrefStore::new(dir.path());

    prefs::save_llm(&store, &LlmConfig::default()).unwrap();
    assert!(dir.path().join("llm_config.json").exists());
    assert!(!dir.path().join("audio_config.json").exists());

    prefs::save_audio(&store, &AudioEffects::default()).unwrap();
    assert!(dir.path().join("audio_config.json").exists());
}
