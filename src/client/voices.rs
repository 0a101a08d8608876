//! Voice catalog and assignment endpoints.

use serde::Serialize;

use crate::error::Result;
use crate::types::{Voice, VoiceAssignments};

use super::StudioClient;

#[derive(Debug, Serialize)]
struct AssignVoiceRequest<'a> {
    voice_identifier: &'a str,
}

impl StudioClient {
    /// List the read-only voice catalog.
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        self.get_json("/api/voices").await
    }

    /// Current persona -> voice assignment.
    pub async fn persona_voices(&self) -> Result<VoiceAssignments> {
        self.get_json("/api/persona-voices").await
    }

    /// Recompute the whole assignment. Session-level TTS caches must be
    /// invalidated afterwards; [`crate::workflow::auto_assign_voices`] does
    /// both together.
    pub async fn auto_assign_voices(&self) -> Result<VoiceAssignments> {
        self.post_empty("/api/auto-assign-voices").await
    }

    /// Manually pin one persona to a voice.
    pub async fn assign_voice(
        &self,
        persona_name: &str,
        voice_identifier: &str,
    ) -> Result<serde_json::Value> {
        self.post_json(
            &format!("/api/personas/{persona_name}/assign-voice"),
            &AssignVoiceRequest { voice_identifier },
        )
        .await
    }
}
