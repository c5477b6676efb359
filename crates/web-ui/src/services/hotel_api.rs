//! Public hotel browsing API

use crate::models::{BookableRoom, Hotel, HotelResponse, HotelsResponse, RoomsWithStatusResponse, UiResult};
use crate::services::api_client::ApiClient;
use crate::services::config::endpoints;

#[derive(Clone, PartialEq)]
pub struct HotelApi {
    client: ApiClient,
}

impl HotelApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_hotels(&self) -> UiResult<Vec<Hotel>> {
        let response: HotelsResponse = self.client.get_public_json(endpoints::HOTELS).await?;
        Ok(response.hotels)
    }

    pub async fn hotel(&self, hotel_id: i64) -> UiResult<Hotel> {
        let response: HotelResponse = self
            .client
            .get_public_json(&endpoints::hotel(hotel_id))
            .await?;
        Ok(response.into_hotel())
    }

    /// Rooms with availability for a stay; dates are `YYYY-MM-DD`
    pub async fn rooms_with_status(
        &self,
        hotel_id: i64,
        check_in: &str,
        check_out: &str,
    ) -> UiResult<Vec<BookableRoom>> {
        let response: RoomsWithStatusResponse = self
            .client
            .get_public_json(&endpoints::rooms_with_status(hotel_id, check_in, check_out))
            .await?;
        Ok(response.rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::testing::admin_client;

    #[tokio::test]
    async fn test_rooms_with_status_query() {
        let (client, transport) = admin_client();
        transport.respond(
            200,
            serde_json::json!({ "rooms": [{
                "id": 1,
                "room_number": "M1",
                "floor": 2,
                "room_category": "meeting_room",
                "pricing_type": "per_hour",
                "hourly_rate": 300000.0,
                "is_available": true,
                "is_booked": false
            }]}),
        );

        let rooms = HotelApi::new(client)
            .rooms_with_status(4, "2025-02-01", "2025-02-02")
            .await
            .unwrap();
        assert_eq!(rooms[0].category.price_label(), "/hour");
        assert_eq!(
            transport.sent()[0].url,
            "http://localhost:8080/api/v1/hotels/4/rooms-with-status?check_in=2025-02-01&check_out=2025-02-02"
        );
        assert!(transport.sent()[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_list_hotels_empty_body() {
        let (client, transport) = admin_client();
        transport.respond(200, serde_json::json!({}));
        assert!(HotelApi::new(client).list_hotels().await.unwrap().is_empty());
    }
}
