//! Floor-plan layout API

use crate::models::{
    FloorLayoutResponse, HotelRoomsResponse, LayoutUpdate, LayoutUpdateRequest,
    LayoutUpdateResponse, RoomTile, RoomType, RoomTypesResponse, UiResult, derive_floors,
};
use crate::services::api_client::ApiClient;
use crate::services::config::endpoints;

/// Layout endpoints for one hotel
#[derive(Clone, PartialEq)]
pub struct LayoutApi {
    client: ApiClient,
    hotel_id: i64,
}

impl LayoutApi {
    pub fn new(client: ApiClient, hotel_id: i64) -> Self {
        Self { client, hotel_id }
    }

    pub fn hotel_id(&self) -> i64 {
        self.hotel_id
    }

    /// Sorted distinct floors that have at least one room
    pub async fn floors(&self) -> UiResult<Vec<i32>> {
        let response: HotelRoomsResponse = self
            .client
            .get_json(&endpoints::hotel_rooms(self.hotel_id))
            .await?;
        Ok(derive_floors(&response.rooms))
    }

    pub async fn room_types(&self) -> UiResult<Vec<RoomType>> {
        let response: RoomTypesResponse = self
            .client
            .get_json(&endpoints::hotel_room_types(self.hotel_id))
            .await?;
        Ok(response.room_types)
    }

    /// Tiles on `floor`, optionally limited to one room type
    pub async fn floor_rooms(&self, floor: i32, room_type_id: Option<i64>) -> UiResult<Vec<RoomTile>> {
        let response: FloorLayoutResponse = self
            .client
            .get_json(&endpoints::floor_layout(self.hotel_id, floor, room_type_id))
            .await?;
        Ok(response.rooms)
    }

    /// Push a batch of tile geometries; returns how many rooms were updated
    pub async fn update_layout(&self, updates: Vec<LayoutUpdate>) -> UiResult<u32> {
        let request = LayoutUpdateRequest { updates };
        let response: LayoutUpdateResponse = self
            .client
            .put_json(&endpoints::layout(self.hotel_id), &request)
            .await?;
        Ok(response.updated_count)
    }

    /// Drop every custom position for the hotel
    pub async fn reset_layout(&self) -> UiResult<()> {
        self.client
            .delete(&endpoints::layout_reset(self.hotel_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::testing::admin_client;
    use crate::services::transport::HttpMethod;

    #[tokio::test]
    async fn test_floors_are_derived_from_hotel_rooms() {
        let (client, transport) = admin_client();
        transport.respond(
            200,
            serde_json::json!({ "rooms": [
                { "id": 1, "room_number": "301", "floor": 3 },
                { "id": 2, "room_number": "101", "floor": 1 },
                { "id": 3, "room_number": "302", "floor": 3 }
            ]}),
        );

        let api = LayoutApi::new(client, 4);
        assert_eq!(api.floors().await.unwrap(), vec![1, 3]);
        assert_eq!(
            transport.sent()[0].url,
            "http://localhost:8080/api/v1/hotels/4/rooms"
        );
    }

    #[tokio::test]
    async fn test_update_layout_request() {
        let (client, transport) = admin_client();
        transport.respond(200, serde_json::json!({ "updated_count": 1 }));

        let api = LayoutApi::new(client, 4);
        let count = api
            .update_layout(vec![LayoutUpdate {
                room_id: 9,
                layout_x: Some(60),
                layout_y: Some(80),
                layout_width: 100,
                layout_height: 70,
            }])
            .await
            .unwrap();
        assert_eq!(count, 1);

        let sent = &transport.sent()[0];
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.url, "http://localhost:8080/api/v1/hotels/4/layout");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["updates"][0]["room_id"], 9);
        assert_eq!(body["updates"][0]["layout_x"], 60);
    }

    #[tokio::test]
    async fn test_reset_layout_request() {
        let (client, transport) = admin_client();
        transport.respond(200, serde_json::json!({ "message": "reset" }));

        LayoutApi::new(client, 4).reset_layout().await.unwrap();
        let sent = &transport.sent()[0];
        assert_eq!(sent.method, HttpMethod::Delete);
        assert_eq!(sent.url, "http://localhost:8080/api/v1/hotels/4/layout/reset");
    }
}
