//! Shared test helpers.
#![allow(dead_code)]

use serde_json::json;
use soundstage::config::StudioConfig;
use soundstage::prelude::StudioClient;
use wiremock::MockServer;

/// Client pointed at a mock backend.
pub fn client_for(server: &MockServer) -> StudioClient {
    StudioClient::new(&StudioConfig::new(server.uri())).unwrap()
}

/// A room with a saved speaker config and one furniture item.
pub fn configured_room_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Room {id}"),
        "furnitures": {"bed": {"width": 0.9}},
        "mic_position": "ceiling",
        "speakers_positions_config": {
            "speaker_1": {"placement": "absolute", "x": 1.0, "y": 2.0, "z": 1.6},
            "speaker_2": {"placement": "relative", "object": "bed", "side": "left", "max_distance": 0.4}
        }
    })
}

/// A fresh room with only resolved legacy coordinates.
pub fn legacy_room_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Room {id}"),
        "speakers_positions": {
            "SPEAKER_1": [1.25, 2.0, 1.6],
            "SPEAKER_2": [3.75, 2.0, 1.6]
        }
    })
}
