//! Room endpoints.

use crate::error::Result;
use crate::types::{
    CreateRoomRequest, FurnitureRequest, MicPositionRequest, Room, SpeakersConfig,
};

use super::StudioClient;

impl StudioClient {
    /// List all rooms.
    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.get_json("/api/rooms").await
    }

    /// Create a room; geometry fields depend on the generator type.
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<Room> {
        self.post_json("/api/rooms", request).await
    }

    /// Delete a room. Session edit state for the room must be evicted
    /// alongside; [`crate::workflow::delete_room`] does both together.
    pub async fn delete_room(&self, room_id: &str) -> Result<()> {
        self.delete(&format!("/api/rooms/{room_id}")).await
    }

    /// URL of the rendered room-layout image, cache-busted so a fresh
    /// render is fetched after every configuration change.
    pub fn room_image_url(&self, room_id: &str, width: u32, height: u32) -> String {
        let t = chrono::Utc::now().timestamp_millis();
        self.url(&format!(
            "/api/rooms/{room_id}/image?width={width}&height={height}&t={t}"
        ))
    }

    /// Add one furniture item to a room.
    pub async fn add_furniture(
        &self,
        room_id: &str,
        furniture: &FurnitureRequest,
    ) -> Result<serde_json::Value> {
        self.post_json(&format!("/api/rooms/{room_id}/furniture"), furniture)
            .await
    }

    /// Replace a room's per-speaker placement configuration.
    pub async fn set_speaker_positions(
        &self,
        room_id: &str,
        config: &SpeakersConfig,
    ) -> Result<serde_json::Value> {
        self.post_json(&format!("/api/rooms/{room_id}/speaker-positions"), config)
            .await
    }

    /// Replace a room's microphone configuration wholesale.
    pub async fn set_mic_position(
        &self,
        room_id: &str,
        request: &MicPositionRequest,
    ) -> Result<serde_json::Value> {
        self.post_json(&format!("/api/rooms/{room_id}/mic-position"), request)
            .await
    }
}
