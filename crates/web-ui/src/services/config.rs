//! Backend location and endpoint paths

/// Backend used when nothing is configured at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Version prefix shared by every endpoint
const API_PREFIX: &str = "/api/v1";

/// Where the REST backend lives
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config from a base URL, with or without the `/api/v1` suffix
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(API_PREFIX).unwrap_or(trimmed);
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Read `BUATEVENT_API_BASE_URL` as baked in at compile time
    pub fn from_env() -> Self {
        match option_env!("BUATEVENT_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Host part, e.g. `http://localhost:8080`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root that endpoint paths are appended to
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Endpoint paths relative to [`ApiConfig::api_root`]
pub mod endpoints {
    pub const LOGIN: &str = "/auth/login";
    pub const HOTELS: &str = "/hotels";
    pub const BLOCKCHAIN_STATS: &str = "/blockchain/stats";
    pub const BLOCKCHAIN_BLOCKS: &str = "/blockchain/blocks";
    pub const MY_BOOKINGS: &str = "/reservations/user/my-bookings";

    pub fn hotel(hotel_id: i64) -> String {
        format!("/hotels/{}", hotel_id)
    }

    pub fn hotel_rooms(hotel_id: i64) -> String {
        format!("/hotels/{}/rooms", hotel_id)
    }

    pub fn hotel_room(hotel_id: i64, room_id: i64) -> String {
        format!("/hotels/{}/rooms/{}", hotel_id, room_id)
    }

    pub fn hotel_room_types(hotel_id: i64) -> String {
        format!("/hotels/{}/room-types", hotel_id)
    }

    pub fn hotel_room_type(hotel_id: i64, room_type_id: i64) -> String {
        format!("/hotels/{}/room-types/{}", hotel_id, room_type_id)
    }

    pub fn reservation(reservation_id: &str) -> String {
        format!("/reservations/{}", reservation_id)
    }

    pub fn rooms_with_status(hotel_id: i64, check_in: &str, check_out: &str) -> String {
        format!(
            "/hotels/{}/rooms-with-status?check_in={}&check_out={}",
            hotel_id, check_in, check_out
        )
    }

    pub fn floor_layout(hotel_id: i64, floor: i32, room_type_id: Option<i64>) -> String {
        match room_type_id {
            Some(type_id) => format!(
                "/hotels/{}/layout/{}?room_type_id={}",
                hotel_id, floor, type_id
            ),
            None => format!("/hotels/{}/layout/{}", hotel_id, floor),
        }
    }

    pub fn layout(hotel_id: i64) -> String {
        format!("/hotels/{}/layout", hotel_id)
    }

    pub fn layout_reset(hotel_id: i64) -> String {
        format!("/hotels/{}/layout/reset", hotel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(ApiConfig::new("http://api.local/").base_url(), "http://api.local");
        assert_eq!(
            ApiConfig::new("http://api.local/api/v1").api_root(),
            "http://api.local/api/v1"
        );
        assert_eq!(ApiConfig::default().api_root(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_layout_endpoints() {
        assert_eq!(endpoints::floor_layout(4, 2, None), "/hotels/4/layout/2");
        assert_eq!(
            endpoints::floor_layout(4, 2, Some(9)),
            "/hotels/4/layout/2?room_type_id=9"
        );
        assert_eq!(endpoints::layout(4), "/hotels/4/layout");
        assert_eq!(endpoints::layout_reset(4), "/hotels/4/layout/reset");
    }

    #[test]
    fn test_back_office_endpoints() {
        assert_eq!(endpoints::hotel_room(4, 11), "/hotels/4/rooms/11");
        assert_eq!(endpoints::hotel_room_type(4, 2), "/hotels/4/room-types/2");
        assert_eq!(endpoints::reservation("RSV-1"), "/reservations/RSV-1");
    }
}
