//! Guest reservation lookups

use crate::models::{Reservation, ReservationResponse, ReservationsResponse, UiError, UiResult};
use crate::services::api_client::ApiClient;
use crate::services::config::endpoints;

#[derive(Clone, PartialEq)]
pub struct ReservationApi {
    client: ApiClient,
}

impl ReservationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Bookings of the logged-in user
    pub async fn my_bookings(&self) -> UiResult<Vec<Reservation>> {
        let response: ReservationsResponse = self.client.get_json(endpoints::MY_BOOKINGS).await?;
        Ok(response.reservations)
    }

    /// One reservation by its public booking reference
    pub async fn reservation(&self, reservation_id: &str) -> UiResult<Reservation> {
        let response: ReservationResponse = self
            .client
            .get_public_json(&endpoints::reservation(reservation_id))
            .await?;
        response
            .reservation
            .ok_or_else(|| UiError::api_with_status("Reservation not found", 404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::testing::admin_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_my_bookings_sends_token() {
        let (client, transport) = admin_client();
        transport.respond(
            200,
            json!({ "reservations": [{
                "id": 1,
                "reservation_id": "RSV-1",
                "check_in": "2025-05-01",
                "check_out": "2025-05-02",
                "status": "PENDING"
            }]}),
        );

        let bookings = ReservationApi::new(client).my_bookings().await.unwrap();
        assert_eq!(bookings.len(), 1);
        let sent = &transport.sent()[0];
        assert_eq!(sent.url, "http://localhost:8080/api/v1/reservations/user/my-bookings");
        assert!(sent.headers.get("Authorization").is_some());
    }

    #[tokio::test]
    async fn test_reservation_without_body_is_not_found() {
        let (client, transport) = admin_client();
        transport.respond(200, json!({}));

        let err = ReservationApi::new(client)
            .reservation("RSV-404")
            .await
            .unwrap_err();
        assert!(err.user_message().contains("Reservation not found"));
        assert_eq!(
            transport.sent()[0].url,
            "http://localhost:8080/api/v1/reservations/RSV-404"
        );
        assert!(transport.sent()[0].headers.get("Authorization").is_none());
    }
}
