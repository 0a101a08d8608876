//! Session-scoped mutable state.
//!
//! Everything here lives for one interactive session and is owned by a
//! single [`SessionState`] with named mutation entry points, so the cache
//! invalidation rules stay auditable: an edit-cache entry dies when its room
//! is deleted or a speaker submission succeeds, and the synthesized-dialog
//! marker set dies wholesale when voices are reassigned.

pub mod placement;

pub use placement::{
    furniture_options, seed_mic_form, seed_speaker_form, MicForm, PlacementKind, SeedSource,
    SpeakerFields, SpeakerForm,
};

use std::collections::{HashMap, HashSet};

/// Session-lived state shared across UI actions.
#[derive(Debug, Default)]
pub struct SessionState {
    edit_cache: HashMap<String, SpeakerForm>,
    synthesized: HashSet<String>,
    current_dialog: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage in-progress speaker edits for a room. Called on every field
    /// change, not only on submit, so closing and reopening the form never
    /// loses edits within the session.
    pub fn stage_edit(&mut self, room_id: &str, form: SpeakerForm) {
        self.edit_cache.insert(room_id.to_string(), form);
    }

    /// Staged edits for a room, if any.
    pub fn staged(&self, room_id: &str) -> Option<&SpeakerForm> {
        self.edit_cache.get(room_id)
    }

    /// Drop staged edits for one room. Other rooms are untouched.
    pub fn evict_room(&mut self, room_id: &str) {
        if self.edit_cache.remove(room_id).is_some() {
            tracing::debug!(room_id, "evicted staged speaker edits");
        }
    }

    /// Record that TTS synthesis ran for a dialog under the current voice
    /// mapping.
    pub fn mark_synthesized(&mut self, dialog_id: &str) {
        self.synthesized.insert(dialog_id.to_string());
    }

    /// Whether TTS output for this dialog can be reused.
    pub fn is_synthesized(&self, dialog_id: &str) -> bool {
        self.synthesized.contains(dialog_id)
    }

    /// Invalidate all synthesized-audio markers. Runs after voice
    /// reassignment, since cached audio reflects the old mapping.
    pub fn clear_synthesized(&mut self) {
        if !self.synthesized.is_empty() {
            tracing::info!("voice assignments changed, clearing TTS markers");
        }
        self.synthesized.clear();
    }

    pub fn set_current_dialog(&mut self, dialog_id: impl Into<String>) {
        self.current_dialog = Some(dialog_id.into());
    }

    pub fn current_dialog(&self) -> Option<&str> {
        self.current_dialog.as_deref()
    }
}
