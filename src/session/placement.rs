//! Speaker and microphone placement forms, and the seed resolver.
//!
//! Form fields hold the raw strings a user would see and type. Numbers are
//! only parsed at submit time, so half-finished edits can be staged without
//! validation getting in the way.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, StudioError};
use crate::types::{
    MicPosition, MicPositionRequest, PlacementSide, Room, SpeakerPlacement, SpeakerSlot,
    SpeakersConfig,
};

use super::SessionState;

/// Which placement inputs apply to a speaker slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    #[default]
    Absolute,
    Relative,
}

/// Form state for one speaker slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerFields {
    pub placement: PlacementKind,
    pub x: String,
    pub y: String,
    pub z: String,
    pub object: String,
    pub side: PlacementSide,
    pub max_distance: String,
}

impl Default for SpeakerFields {
    fn default() -> Self {
        Self {
            placement: PlacementKind::Absolute,
            x: "0.00".to_string(),
            y: "0.00".to_string(),
            z: "0.00".to_string(),
            object: String::new(),
            side: PlacementSide::Any,
            max_distance: "0.3".to_string(),
        }
    }
}

impl SpeakerFields {
    fn from_placement(placement: &SpeakerPlacement) -> Self {
        let mut fields = Self::default();
        match placement {
            SpeakerPlacement::Absolute { x, y, z } => {
                fields.placement = PlacementKind::Absolute;
                fields.x = x.to_string();
                fields.y = y.to_string();
                fields.z = z.to_string();
            }
            SpeakerPlacement::Relative {
                object,
                side,
                max_distance,
            } => {
                fields.placement = PlacementKind::Relative;
                fields.object = object.clone();
                fields.side = *side;
                fields.max_distance = max_distance.to_string();
            }
        }
        fields
    }

    fn from_coordinates(position: [f64; 3]) -> Self {
        Self {
            x: format!("{:.2}", position[0]),
            y: format!("{:.2}", position[1]),
            z: format!("{:.2}", position[2]),
            ..Self::default()
        }
    }

    /// Build the submit payload for this slot, carrying only the fields
    /// relevant to the chosen placement kind.
    fn to_placement(&self, slot: SpeakerSlot) -> Result<SpeakerPlacement> {
        match self.placement {
            PlacementKind::Absolute => Ok(SpeakerPlacement::Absolute {
                x: parse_field(&self.x, slot, "x")?,
                y: parse_field(&self.y, slot, "y")?,
                z: parse_field(&self.z, slot, "z")?,
            }),
            PlacementKind::Relative => {
                if self.object.trim().is_empty() {
                    return Err(StudioError::precondition(format!(
                        "{}: relative placement needs a furniture reference",
                        slot.key()
                    )));
                }
                Ok(SpeakerPlacement::Relative {
                    object: self.object.trim().to_string(),
                    side: self.side,
                    max_distance: parse_field(&self.max_distance, slot, "max_distance")?,
                })
            }
        }
    }
}

fn parse_field(value: &str, slot: SpeakerSlot, field: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| {
        StudioError::precondition(format!(
            "{}.{field} is not a number: {value:?}",
            slot.key()
        ))
    })
}

/// Form state for both speaker slots of one room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerForm {
    pub speakers: [SpeakerFields; 2],
}

impl SpeakerForm {
    pub fn get(&self, slot: SpeakerSlot) -> &SpeakerFields {
        &self.speakers[slot.index()]
    }

    pub fn get_mut(&mut self, slot: SpeakerSlot) -> &mut SpeakerFields {
        &mut self.speakers[slot.index()]
    }

    fn from_config(config: &SpeakersConfig) -> Self {
        let mut form = Self::default();
        for slot in SpeakerSlot::ALL {
            if let Some(placement) = config.get(slot) {
                form.speakers[slot.index()] = SpeakerFields::from_placement(placement);
            }
        }
        form
    }

    fn from_room_defaults(room: &Room) -> Self {
        let mut form = Self::default();
        for slot in SpeakerSlot::ALL {
            if let Some(position) = room.legacy_position(slot) {
                form.speakers[slot.index()] = SpeakerFields::from_coordinates(position);
            }
        }
        form
    }

    /// Parse the form into the submit payload. Fails with a precondition
    /// error, before any request is issued, when a numeric field does not
    /// parse or a relative slot lacks its anchor.
    pub fn to_config(&self) -> Result<SpeakersConfig> {
        let mut config = SpeakersConfig::default();
        for slot in SpeakerSlot::ALL {
            config.set(slot, self.get(slot).to_placement(slot)?);
        }
        Ok(config)
    }
}

/// Where a seeded speaker form came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Resumed in-progress edits staged earlier this session.
    Cache,
    /// Loaded from the room's saved placement configuration.
    SavedConfig,
    /// Derived from resolved legacy coordinates, or zeroed.
    Defaults,
}

/// Seed the speaker form for a room, resolving in priority order: staged
/// session edits, then the saved server-side config, then defaults derived
/// from the room's resolved coordinates. The second and third tiers
/// snapshot the result into the session so the staged copy is authoritative
/// from then on.
pub fn seed_speaker_form(room: &Room, session: &mut SessionState) -> (SpeakerForm, SeedSource) {
    if let Some(staged) = session.staged(&room.id) {
        return (staged.clone(), SeedSource::Cache);
    }

    if let Some(config) = room
        .speakers_positions_config
        .as_ref()
        .filter(|config| !config.is_empty())
    {
        let form = SpeakerForm::from_config(config);
        session.stage_edit(&room.id, form.clone());
        return (form, SeedSource::SavedConfig);
    }

    let form = SpeakerForm::from_room_defaults(room);
    session.stage_edit(&room.id, form.clone());
    (form, SeedSource::Defaults)
}

/// Furniture names available as relative-placement anchors, rebuilt from
/// the room's current furniture mapping on every open. Empty means the
/// caller shows a disabled placeholder.
pub fn furniture_options(room: &Room) -> Vec<String> {
    room.furnitures.keys().cloned().collect()
}

/// Form state for the microphone placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicForm {
    pub position: MicPosition,
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Default for MicForm {
    fn default() -> Self {
        Self {
            position: MicPosition::default(),
            x: "0.00".to_string(),
            y: "0.00".to_string(),
            z: "0.00".to_string(),
        }
    }
}

impl MicForm {
    /// Whether the custom-coordinate fields apply.
    pub fn is_custom(&self) -> bool {
        self.position == MicPosition::Custom
    }

    /// Build the submit payload; coordinates are only included for the
    /// custom sentinel.
    pub fn to_request(&self) -> Result<MicPositionRequest> {
        if !self.is_custom() {
            return Ok(MicPositionRequest {
                position: self.position,
                x: None,
                y: None,
                z: None,
            });
        }
        Ok(MicPositionRequest {
            position: MicPosition::Custom,
            x: Some(parse_mic_field(&self.x, "x")?),
            y: Some(parse_mic_field(&self.y, "y")?),
            z: Some(parse_mic_field(&self.z, "z")?),
        })
    }
}

fn parse_mic_field(value: &str, field: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| {
        StudioError::precondition(format!("mic {field} is not a number: {value:?}"))
    })
}

/// Seed the mic form from the room's stored value, case-normalized.
pub fn seed_mic_form(room: &Room) -> MicForm {
    MicForm {
        position: MicPosition::normalize(room.mic_position.as_deref()),
        ..MicForm::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bare_room(id: &str) -> Room {
        serde_json::from_value(json!({"id": id, "name": format!("room {id}")})).unwrap()
    }

    fn room_with_legacy(id: &str) -> Room {
        serde_json::from_value(json!({
            "id": id,
            "name": "Ward",
            "speakers_positions": {
                "SPEAKER_1": [1.25, 2.0, 1.6],
                "SPEAKER_2": [3.756, 2.0, 1.6]
            }
        }))
        .unwrap()
    }

    #[test]
    fn defaults_derive_from_legacy_positions_two_decimals() {
        let mut session = SessionState::new();
        let (form, source) = seed_speaker_form(&room_with_legacy("r1"), &mut session);

        assert_eq!(source, SeedSource::Defaults);
        assert_eq!(form.get(SpeakerSlot::Speaker1).x, "1.25");
        assert_eq!(form.get(SpeakerSlot::Speaker2).x, "3.76");
        assert_eq!(form.get(SpeakerSlot::Speaker1).side, PlacementSide::Any);
        assert_eq!(form.get(SpeakerSlot::Speaker1).max_distance, "0.3");
        // Snapshot became authoritative.
        assert_eq!(session.staged("r1"), Some(&form));
    }

    #[test]
    fn defaults_zero_when_legacy_positions_malformed() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "name": "Ward",
            "speakers_positions": {"SPEAKER_1": [1.0, 2.0], "SPEAKER_2": "n/a"}
        }))
        .unwrap();

        let mut session = SessionState::new();
        let (form, source) = seed_speaker_form(&room, &mut session);

        assert_eq!(source, SeedSource::Defaults);
        for slot in SpeakerSlot::ALL {
            assert_eq!(form.get(slot).x, "0.00");
            assert_eq!(form.get(slot).y, "0.00");
            assert_eq!(form.get(slot).z, "0.00");
        }
    }

    #[test]
    fn saved_config_beats_defaults_and_snapshots() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "name": "Ward",
            "speakers_positions_config": {
                "speaker_1": {"placement": "relative", "object": "bed", "side": "left"},
                "speaker_2": {"placement": "absolute", "x": 2.5, "y": 1.0, "z": 1.6}
            },
            "speakers_positions": {"SPEAKER_1": [9.0, 9.0, 9.0]}
        }))
        .unwrap();

        let mut session = SessionState::new();
        let (form, source) = seed_speaker_form(&room, &mut session);

        assert_eq!(source, SeedSource::SavedConfig);
        let first = form.get(SpeakerSlot::Speaker1);
        assert_eq!(first.placement, PlacementKind::Relative);
        assert_eq!(first.object, "bed");
        assert_eq!(first.side, PlacementSide::Left);
        assert_eq!(first.max_distance, "0.3");
        let second = form.get(SpeakerSlot::Speaker2);
        assert_eq!(second.placement, PlacementKind::Absolute);
        assert_eq!(second.x, "2.5");
        assert_eq!(session.staged("r1"), Some(&form));
    }

    #[test]
    fn empty_saved_config_counts_as_absent() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "name": "Ward",
            "speakers_positions_config": {},
            "speakers_positions": {"SPEAKER_1": [1.0, 2.0, 3.0], "SPEAKER_2": [4.0, 5.0, 6.0]}
        }))
        .unwrap();

        let mut session = SessionState::new();
        let (form, source) = seed_speaker_form(&room, &mut session);
        assert_eq!(source, SeedSource::Defaults);
        assert_eq!(form.get(SpeakerSlot::Speaker1).z, "3.00");
    }

    #[test]
    fn staged_edits_win_and_never_leak_across_rooms() {
        let mut session = SessionState::new();
        let room_a = room_with_legacy("a");
        let room_b = bare_room("b");

        let (mut form, _) = seed_speaker_form(&room_a, &mut session);
        form.get_mut(SpeakerSlot::Speaker1).x = "7.77".to_string();
        session.stage_edit("a", form.clone());

        // Reopening room A resumes the edit verbatim.
        let (reopened, source) = seed_speaker_form(&room_a, &mut session);
        assert_eq!(source, SeedSource::Cache);
        assert_eq!(reopened, form);

        // Room B is seeded from its own state, not room A's cache.
        let (other, source) = seed_speaker_form(&room_b, &mut session);
        assert_eq!(source, SeedSource::Defaults);
        assert_eq!(other.get(SpeakerSlot::Speaker1).x, "0.00");
    }

    #[test]
    fn submit_payload_carries_only_relevant_fields() {
        let mut form = SpeakerForm::default();
        form.get_mut(SpeakerSlot::Speaker1).x = "1.5".to_string();
        let second = form.get_mut(SpeakerSlot::Speaker2);
        second.placement = PlacementKind::Relative;
        second.object = "desk".to_string();
        second.side = PlacementSide::Front;
        second.max_distance = "0.5".to_string();

        let config = form.to_config().unwrap();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "speaker_1": {"placement": "absolute", "x": 1.5, "y": 0.0, "z": 0.0},
                "speaker_2": {
                    "placement": "relative",
                    "object": "desk",
                    "side": "front",
                    "max_distance": 0.5
                }
            })
        );
    }

    #[test]
    fn unparseable_field_is_a_precondition_error() {
        let mut form = SpeakerForm::default();
        form.get_mut(SpeakerSlot::Speaker1).x = "near the window".to_string();

        let err = form.to_config().unwrap_err();
        assert!(matches!(err, StudioError::Precondition(_)));
    }

    #[test]
    fn relative_without_anchor_is_rejected() {
        let mut form = SpeakerForm::default();
        form.get_mut(SpeakerSlot::Speaker2).placement = PlacementKind::Relative;

        let err = form.to_config().unwrap_err();
        assert!(matches!(err, StudioError::Precondition(_)));
    }

    #[test]
    fn furniture_options_track_the_room_mapping() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "name": "Ward",
            "furnitures": {"bed": {}, "cabinet": {}}
        }))
        .unwrap();
        assert_eq!(furniture_options(&room), vec!["bed", "cabinet"]);
        assert!(furniture_options(&bare_room("r2")).is_empty());
    }

    #[test]
    fn mic_form_seeds_case_normalized_and_gates_custom_coords() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "name": "Ward",
            "mic_position": "CEILING"
        }))
        .unwrap();
        let form = seed_mic_form(&room);
        assert_eq!(form.position, MicPosition::Ceiling);
        assert!(!form.is_custom());
        let request = form.to_request().unwrap();
        assert!(request.x.is_none());

        let custom = MicForm {
            position: MicPosition::Custom,
            x: "1.1".to_string(),
            ..MicForm::default()
        };
        let request = custom.to_request().unwrap();
        assert_eq!(request.x, Some(1.1));
        assert_eq!(request.y, Some(0.0));
    }
}
