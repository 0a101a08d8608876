//! Persona endpoints.

use serde::Serialize;

use crate::error::Result;
use crate::prefs::LlmConfig;
use crate::types::Persona;

use super::StudioClient;

#[derive(Debug, Serialize)]
struct GeneratePersonasRequest<'a> {
    model_config: &'a LlmConfig,
}

impl StudioClient {
    /// List all personas.
    pub async fn list_personas(&self) -> Result<Vec<Persona>> {
        self.get_json("/api/personas").await
    }

    /// Create a persona from explicit fields.
    pub async fn create_persona(&self, persona: &Persona) -> Result<Persona> {
        self.post_json("/api/personas", persona).await
    }

    /// Generate two personas via the configured model.
    pub async fn generate_personas(&self, model: &LlmConfig) -> Result<Vec<Persona>> {
        self.post_json(
            "/api/personas/generate",
            &GeneratePersonasRequest { model_config: model },
        )
        .await
    }
}
