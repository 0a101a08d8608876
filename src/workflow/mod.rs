//! Operations spanning the client and the session state.
//!
//! These are the only places session caches are invalidated, so the rules
//! from the UI stay in one spot: a successful speaker submission or a room
//! deletion evicts that room's staged edits, and a voice reassignment
//! clears every synthesized-audio marker. Failures leave session state
//! untouched so in-progress edits survive.

use crate::client::{CreateDialogRequest, StudioClient};
use crate::error::{Result, StudioError};
use crate::prefs::LlmConfig;
use crate::session::{SessionState, SpeakerForm};
use crate::types::{AudioDialog, AudioEffects, Dialog, GenerateAudioRequest, VoiceAssignments};

/// Submit staged speaker placements for a room. The form is validated
/// before any request goes out; on success the staged entry is evicted so
/// the next open reloads the server's authoritative config.
pub async fn submit_speaker_positions(
    client: &StudioClient,
    session: &mut SessionState,
    room_id: &str,
    form: &SpeakerForm,
) -> Result<()> {
    let config = form.to_config()?;
    client.set_speaker_positions(room_id, &config).await?;
    session.evict_room(room_id);
    Ok(())
}

/// Delete a room and drop any staged edits for it.
pub async fn delete_room(
    client: &StudioClient,
    session: &mut SessionState,
    room_id: &str,
) -> Result<()> {
    client.delete_room(room_id).await?;
    session.evict_room(room_id);
    Ok(())
}

/// Recompute voice assignments and invalidate every synthesized-audio
/// marker, since cached TTS output reflects the old mapping.
pub async fn auto_assign_voices(
    client: &StudioClient,
    session: &mut SessionState,
) -> Result<VoiceAssignments> {
    let assignments = client.auto_assign_voices().await?;
    session.clear_synthesized();
    Ok(assignments)
}

/// Generate a dialog and record its id as the session's current dialog.
pub async fn create_dialog(
    client: &StudioClient,
    session: &mut SessionState,
    request: &CreateDialogRequest,
) -> Result<Dialog> {
    let dialog = client.create_dialog(request).await?;
    session.set_current_dialog(dialog.id.clone());
    Ok(dialog)
}

/// Render audio for the session's current dialog in the named room.
///
/// TTS synthesis (step 1) is skipped when this dialog was already
/// synthesized under the current voice mapping; combination and room
/// acoustics (steps 2 and 3) always run. The effects payload is passed
/// through fresh on every call, never cached.
pub async fn generate_audio(
    client: &StudioClient,
    session: &mut SessionState,
    room_name: &str,
    effects: &AudioEffects,
) -> Result<AudioDialog> {
    let dialog_id = session
        .current_dialog()
        .ok_or_else(|| StudioError::precondition("generate a dialog first"))?
        .to_string();
    if room_name.trim().is_empty() {
        return Err(StudioError::precondition(
            "select a room for audio generation",
        ));
    }

    let do_step_1 = !session.is_synthesized(&dialog_id);
    let request = GenerateAudioRequest {
        do_step_1,
        do_step_2: true,
        do_step_3: true,
        room_name: room_name.trim().to_string(),
        audio_config: effects.clone(),
    };

    let rendered = client.generate_audio(&dialog_id, &request).await?;
    if do_step_1 {
        tracing::info!(%dialog_id, "TTS synthesized, marking dialog as cached");
        session.mark_synthesized(&dialog_id);
    } else {
        tracing::debug!(%dialog_id, "reused cached TTS output");
    }
    Ok(rendered)
}

/// Convenience constructor for a dialog request embedding the configured
/// model settings.
pub fn dialog_request(
    persona1: impl Into<String>,
    persona2: impl Into<String>,
    context: crate::types::DialogContext,
    max_turns: u32,
    model: &LlmConfig,
) -> CreateDialogRequest {
    CreateDialogRequest {
        persona1: persona1.into(),
        persona2: persona2.into(),
        context,
        max_turns,
        model_config: model.clone(),
    }
}
