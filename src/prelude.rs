//! Convenience re-exports for common use.

pub use crate::client::{CreateDialogRequest, StudioClient};
pub use crate::config::StudioConfig;
pub use crate::error::{Result, StudioError};
pub use crate::prefs::{FilePrefStore, LlmConfig, PrefStore};
pub use crate::session::{SeedSource, SessionState, SpeakerForm};
pub use crate::types::{
    AudioDialog, AudioEffects, CreateRoomRequest, Dialog, DialogContext, MicPosition, Persona,
    PlacementSide, Room, RoomGeometry, SpeakerPlacement, SpeakerSlot, Voice,
};
