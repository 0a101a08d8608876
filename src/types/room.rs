//! Room model: geometry, furniture, speaker and microphone placement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A simulated acoustic space as returned by `GET /api/rooms`.
///
/// `speakers_positions` is the legacy resolved-coordinate field the backend
/// fills in when no explicit placement config exists yet. It is kept loosely
/// typed: only entries that are exactly three numbers are usable, and older
/// rooms have been observed with other shapes in that slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub furnitures: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mic_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers_positions_config: Option<SpeakersConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers_positions: Option<BTreeMap<String, serde_json::Value>>,
}

impl Room {
    /// Resolved legacy coordinates for a speaker slot, if present and
    /// well-formed (exactly three numeric components). Keys are matched
    /// case-insensitively because the backend serializes the slot enum in
    /// upper case (`SPEAKER_1`) while configs use lower case.
    pub fn legacy_position(&self, slot: SpeakerSlot) -> Option<[f64; 3]> {
        let positions = self.speakers_positions.as_ref()?;
        let value = positions
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(slot.key()))
            .map(|(_, value)| value)?;
        let components = value.as_array()?;
        if components.len() != 3 {
            return None;
        }
        let mut out = [0.0; 3];
        for (i, component) in components.iter().enumerate() {
            out[i] = component.as_f64()?;
        }
        Some(out)
    }
}

/// Explicit room dimensions in meters (`generator_type = custom`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

/// The two speaker slots every room carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeakerSlot {
    Speaker1,
    Speaker2,
}

impl SpeakerSlot {
    pub const ALL: [SpeakerSlot; 2] = [SpeakerSlot::Speaker1, SpeakerSlot::Speaker2];

    /// Wire key for this slot (`speaker_1` / `speaker_2`).
    pub fn key(self) -> &'static str {
        match self {
            SpeakerSlot::Speaker1 => "speaker_1",
            SpeakerSlot::Speaker2 => "speaker_2",
        }
    }

    /// Zero-based index, for form field arrays.
    pub fn index(self) -> usize {
        match self {
            SpeakerSlot::Speaker1 => 0,
            SpeakerSlot::Speaker2 => 1,
        }
    }
}

/// Per-room speaker placement configuration (`speakers_positions_config`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_1: Option<SpeakerPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_2: Option<SpeakerPlacement>,
}

impl SpeakersConfig {
    pub fn get(&self, slot: SpeakerSlot) -> Option<&SpeakerPlacement> {
        match slot {
            SpeakerSlot::Speaker1 => self.speaker_1.as_ref(),
            SpeakerSlot::Speaker2 => self.speaker_2.as_ref(),
        }
    }

    pub fn set(&mut self, slot: SpeakerSlot, placement: SpeakerPlacement) {
        match slot {
            SpeakerSlot::Speaker1 => self.speaker_1 = Some(placement),
            SpeakerSlot::Speaker2 => self.speaker_2 = Some(placement),
        }
    }

    /// A config with neither slot filled in counts as absent.
    pub fn is_empty(&self) -> bool {
        self.speaker_1.is_none() && self.speaker_2.is_none()
    }
}

/// One speaker's placement: either an explicit coordinate or anchored to a
/// furniture item. Numeric fields default when the stored config predates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "placement", rename_all = "snake_case")]
pub enum SpeakerPlacement {
    Absolute {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        z: f64,
    },
    Relative {
        object: String,
        #[serde(default)]
        side: PlacementSide,
        #[serde(default = "default_max_distance")]
        max_distance: f64,
    },
}

pub(crate) fn default_max_distance() -> f64 {
    0.3
}

/// Side of the anchor furniture a relative speaker may occupy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PlacementSide {
    #[default]
    Any,
    Left,
    Right,
    Front,
    Back,
}

/// Named microphone placements. `Custom` is the sentinel that enables
/// explicit coordinates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MicPosition {
    #[default]
    Center,
    Ceiling,
    Wall,
    Corner,
    Custom,
}

impl MicPosition {
    /// Normalize a stored room value case-insensitively. Absent or unknown
    /// values fall back to `Center`.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
    }
}

/// Geometry selector for room creation. The tag picks which generator the
/// backend runs and which fields accompany it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "generator_type", rename_all = "lowercase")]
pub enum RoomGeometry {
    Custom { width: f64, length: f64, height: f64 },
    Basic { room_size: String },
    Medical { room_type: String },
}

/// Body for `POST /api/rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(flatten)]
    pub geometry: RoomGeometry,
}

/// Body for `POST /api/rooms/{id}/furniture`. Furniture fields beyond the
/// name are free-form and passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureRequest {
    pub name: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Body for `POST /api/rooms/{id}/mic-position`. Coordinates are only sent
/// for the custom sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicPositionRequest {
    pub position: MicPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_room_request_flattens_generator_fields() {
        let request = CreateRoomRequest {
            name: "Office".to_string(),
            geometry: RoomGeometry::Basic {
                room_size: "medium".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Office", "generator_type": "basic", "room_size": "medium"})
        );
    }

    #[test]
    fn speaker_placement_defaults_missing_numeric_fields() {
        let absolute: SpeakerPlacement =
            serde_json::from_value(json!({"placement": "absolute", "x": 1.5})).unwrap();
        assert_eq!(
            absolute,
            SpeakerPlacement::Absolute {
                x: 1.5,
                y: 0.0,
                z: 0.0
            }
        );

        let relative: SpeakerPlacement =
            serde_json::from_value(json!({"placement": "relative", "object": "desk"})).unwrap();
        assert_eq!(
            relative,
            SpeakerPlacement::Relative {
                object: "desk".to_string(),
                side: PlacementSide::Any,
                max_distance: 0.3
            }
        );
    }

    #[test]
    fn legacy_position_requires_three_numbers() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "name": "Lab",
            "speakers_positions": {
                "SPEAKER_1": [1.25, 2.0, 1.6],
                "SPEAKER_2": [1.0, "oops", 1.6]
            }
        }))
        .unwrap();

        assert_eq!(
            room.legacy_position(SpeakerSlot::Speaker1),
            Some([1.25, 2.0, 1.6])
        );
        assert_eq!(room.legacy_position(SpeakerSlot::Speaker2), None);
    }

    #[test]
    fn mic_position_normalizes_case_insensitively() {
        assert_eq!(MicPosition::normalize(Some("CEILING")), MicPosition::Ceiling);
        assert_eq!(MicPosition::normalize(Some(" Wall ")), MicPosition::Wall);
        assert_eq!(MicPosition::normalize(Some("sideboard")), MicPosition::Center);
        assert_eq!(MicPosition::normalize(None), MicPosition::Center);
    }
}
