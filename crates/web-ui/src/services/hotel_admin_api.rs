//! Hotel back-office API: rooms and room types

use crate::models::{
    ActionMessage, HotelRoomSummary, HotelRoomsResponse, RoomDraft, RoomType, RoomTypeDraft,
    RoomTypesResponse, UiResult,
};
use crate::services::api_client::ApiClient;
use crate::services::config::endpoints;

pub const ROOM_SAVED_MESSAGE: &str = "Room saved successfully";
pub const ROOM_DELETED_MESSAGE: &str = "Room deleted successfully";
pub const ROOM_TYPE_SAVED_MESSAGE: &str = "Room type saved successfully";
pub const ROOM_TYPE_DELETED_MESSAGE: &str = "Room type deleted successfully";

/// Room and room type management for one hotel
#[derive(Clone, PartialEq)]
pub struct HotelAdminApi {
    client: ApiClient,
    hotel_id: i64,
}

impl HotelAdminApi {
    pub fn new(client: ApiClient, hotel_id: i64) -> Self {
        Self { client, hotel_id }
    }

    pub fn hotel_id(&self) -> i64 {
        self.hotel_id
    }

    pub async fn rooms(&self) -> UiResult<Vec<HotelRoomSummary>> {
        let response: HotelRoomsResponse = self
            .client
            .get_json(&endpoints::hotel_rooms(self.hotel_id))
            .await?;
        Ok(response.rooms)
    }

    /// Create a room, or update `room_id` when given; returns the backend's message
    pub async fn save_room(&self, room_id: Option<i64>, draft: &RoomDraft) -> UiResult<String> {
        let response: ActionMessage = match room_id {
            Some(id) => {
                self.client
                    .put_json(&endpoints::hotel_room(self.hotel_id, id), draft)
                    .await?
            }
            None => {
                self.client
                    .post_json(&endpoints::hotel_rooms(self.hotel_id), draft, true)
                    .await?
            }
        };
        tracing::info!(hotel_id = self.hotel_id, room_id, "room saved");
        Ok(response.or(ROOM_SAVED_MESSAGE))
    }

    pub async fn delete_room(&self, room_id: i64) -> UiResult<()> {
        self.client
            .delete(&endpoints::hotel_room(self.hotel_id, room_id))
            .await?;
        tracing::info!(hotel_id = self.hotel_id, room_id, "room deleted");
        Ok(())
    }

    pub async fn room_types(&self) -> UiResult<Vec<RoomType>> {
        let response: RoomTypesResponse = self
            .client
            .get_json(&endpoints::hotel_room_types(self.hotel_id))
            .await?;
        Ok(response.room_types)
    }

    pub async fn save_room_type(
        &self,
        room_type_id: Option<i64>,
        draft: &RoomTypeDraft,
    ) -> UiResult<String> {
        let response: ActionMessage = match room_type_id {
            Some(id) => {
                self.client
                    .put_json(&endpoints::hotel_room_type(self.hotel_id, id), draft)
                    .await?
            }
            None => {
                self.client
                    .post_json(&endpoints::hotel_room_types(self.hotel_id), draft, true)
                    .await?
            }
        };
        tracing::info!(hotel_id = self.hotel_id, room_type_id, "room type saved");
        Ok(response.or(ROOM_TYPE_SAVED_MESSAGE))
    }

    pub async fn delete_room_type(&self, room_type_id: i64) -> UiResult<()> {
        self.client
            .delete(&endpoints::hotel_room_type(self.hotel_id, room_type_id))
            .await?;
        tracing::info!(hotel_id = self.hotel_id, room_type_id, "room type deleted");
        Ok(())
    }
}
