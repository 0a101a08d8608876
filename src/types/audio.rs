//! Audio rendering configuration and results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Effect and renderer settings sent with every generate-audio request.
///
/// This same shape is what the preference store persists as the audio blob:
/// booleans default to enabled when a field is absent, so older saved blobs
/// keep working after new toggles are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_effect: Option<String>,
    #[serde(default = "default_volume")]
    pub background_volume: f64,
    #[serde(default = "default_volume")]
    pub foreground_volume: f64,
    #[serde(default = "default_true")]
    pub ray_tracing: bool,
    #[serde(default = "default_true")]
    pub air_absorption: bool,
}

fn default_volume() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl Default for AudioEffects {
    fn default() -> Self {
        Self {
            background_effect: None,
            foreground_effect: None,
            background_volume: 1.0,
            foreground_volume: 1.0,
            ray_tracing: true,
            air_absorption: true,
        }
    }
}

/// Body for `POST /api/dialogs/{id}/generate-audio`.
///
/// Step 1 is TTS synthesis, step 2 combines the utterances, step 3 renders
/// room acoustics. Steps 2 and 3 always run; step 1 is skipped when the
/// session already synthesized this dialog under the current voice mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAudioRequest {
    pub do_step_1: bool,
    pub do_step_2: bool,
    pub do_step_3: bool,
    pub room_name: String,
    pub audio_config: AudioEffects,
}

/// Per-room step-3 render output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRender {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<String>,
}

/// Response of a generate-audio run: file paths for whichever steps ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDialog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_step_1_filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_step_2_filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_step_3_filepaths: Option<BTreeMap<String, RoomRender>>,
}
