//! Dialog generation and audio rendering endpoints.

use serde::Serialize;

use crate::error::Result;
use crate::prefs::LlmConfig;
use crate::types::{AudioDialog, Dialog, DialogContext, GenerateAudioRequest};

use super::StudioClient;

/// Body for `POST /api/dialogs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDialogRequest {
    pub persona1: String,
    pub persona2: String,
    pub context: DialogContext,
    pub max_turns: u32,
    pub model_config: LlmConfig,
}

impl StudioClient {
    /// Generate a dialog between two named personas.
    pub async fn create_dialog(&self, request: &CreateDialogRequest) -> Result<Dialog> {
        self.post_json("/api/dialogs", request).await
    }

    /// Run the audio pipeline for a dialog. Which steps run is controlled by
    /// the request flags; step-skip decisions live in
    /// [`crate::workflow::generate_audio`].
    pub async fn generate_audio(
        &self,
        dialog_id: &str,
        request: &GenerateAudioRequest,
    ) -> Result<AudioDialog> {
        self.post_json(&format!("/api/dialogs/{dialog_id}/generate-audio"), request)
            .await
    }
}
