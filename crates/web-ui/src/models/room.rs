//! Room and floor-plan layout models

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Tile width used when a room has no usable stored width
pub const DEFAULT_TILE_WIDTH: i32 = 100;
/// Tile height used when a room has no usable stored height
pub const DEFAULT_TILE_HEIGHT: i32 = 70;
/// Stored sizes at or below this are treated as unset
const MIN_STORED_EXTENT: i32 = 10;

/// Operational status of a physical room
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    OutOfOrder,
    /// Any status string the backend adds later
    Other(String),
}

impl RoomStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RoomStatus::Available => "AVAILABLE",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Maintenance => "MAINTENANCE",
            RoomStatus::OutOfOrder => "OUT_OF_ORDER",
            RoomStatus::Other(raw) => raw,
        }
    }

    /// Tile background class used on the floor-plan canvas
    pub fn tile_class(&self) -> &'static str {
        match self {
            RoomStatus::Available => "bg-green-500",
            RoomStatus::Occupied => "bg-red-500",
            RoomStatus::Maintenance => "bg-gray-500",
            RoomStatus::OutOfOrder => "bg-gray-700",
            RoomStatus::Other(_) => "bg-blue-500",
        }
    }
}

impl From<String> for RoomStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "AVAILABLE" => RoomStatus::Available,
            "OCCUPIED" => RoomStatus::Occupied,
            "MAINTENANCE" => RoomStatus::Maintenance,
            "OUT_OF_ORDER" => RoomStatus::OutOfOrder,
            _ => RoomStatus::Other(value),
        }
    }
}

/// Status of a room whose record did not carry one
impl Default for RoomStatus {
    fn default() -> Self {
        RoomStatus::Other(String::new())
    }
}

impl From<RoomStatus> for String {
    fn from(status: RoomStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing and `null` statuses both decode to the default
fn nullable_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RoomStatus, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(RoomStatus::from)
        .unwrap_or_default())
}

fn default_tile_width() -> i32 {
    DEFAULT_TILE_WIDTH
}

fn default_tile_height() -> i32 {
    DEFAULT_TILE_HEIGHT
}

/// A room as positioned on the floor-plan canvas
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoomTile {
    pub id: i64,
    pub room_number: String,
    #[serde(default)]
    pub room_type_id: i64,
    #[serde(default)]
    pub room_type_name: String,
    pub floor: i32,
    #[serde(default, deserialize_with = "nullable_status")]
    pub status: RoomStatus,
    /// `None` until the room has been placed
    #[serde(default)]
    pub layout_x: Option<i32>,
    #[serde(default)]
    pub layout_y: Option<i32>,
    #[serde(default = "default_tile_width")]
    pub layout_width: i32,
    #[serde(default = "default_tile_height")]
    pub layout_height: i32,
    #[serde(default)]
    pub is_blockchain_enabled: bool,
}

impl RoomTile {
    /// Check whether the room has a stored position
    pub fn is_placed(&self) -> bool {
        self.layout_x.is_some() && self.layout_y.is_some()
    }

    /// Top-left corner as drawn; unplaced rooms sit at the origin
    pub fn display_position(&self) -> (i32, i32) {
        (self.layout_x.unwrap_or(0), self.layout_y.unwrap_or(0))
    }

    /// Width used for drawing and clamping
    pub fn effective_width(&self) -> i32 {
        if self.layout_width > MIN_STORED_EXTENT {
            self.layout_width
        } else {
            DEFAULT_TILE_WIDTH
        }
    }

    /// Height used for drawing and clamping
    pub fn effective_height(&self) -> i32 {
        if self.layout_height > MIN_STORED_EXTENT {
            self.layout_height
        } else {
            DEFAULT_TILE_HEIGHT
        }
    }

    /// Room type name shortened to fit on a tile
    pub fn short_type_name(&self) -> String {
        const MAX_CHARS: usize = 12;
        if self.room_type_name.chars().count() > MAX_CHARS {
            let head: String = self.room_type_name.chars().take(MAX_CHARS).collect();
            format!("{}...", head)
        } else {
            self.room_type_name.clone()
        }
    }

    /// Batch entry carrying the tile's current geometry
    pub fn to_update(&self) -> LayoutUpdate {
        LayoutUpdate {
            room_id: self.id,
            layout_x: self.layout_x,
            layout_y: self.layout_y,
            layout_width: self.layout_width,
            layout_height: self.layout_height,
        }
    }
}

/// A hotel's room as listed by `GET /hotels/{id}/rooms`
///
/// Feeds both the floor selector and the room management table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HotelRoomSummary {
    pub id: i64,
    #[serde(default)]
    pub room_number: String,
    pub floor: i32,
    #[serde(default)]
    pub room_type_id: i64,
    #[serde(default, deserialize_with = "nullable_status")]
    pub status: RoomStatus,
    #[serde(default)]
    pub is_blockchain_enabled: bool,
}

/// Sorted distinct floor numbers among a hotel's rooms
pub fn derive_floors(rooms: &[HotelRoomSummary]) -> Vec<i32> {
    rooms
        .iter()
        .map(|room| room.floor)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `GET /hotels/{id}/rooms`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HotelRoomsResponse {
    #[serde(default)]
    pub rooms: Vec<HotelRoomSummary>,
}

/// `GET /hotels/{id}/layout/{floor}`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FloorLayoutResponse {
    #[serde(default)]
    pub rooms: Vec<RoomTile>,
}

/// Room type as defined in the hotel back office
///
/// The layout editor only needs `id` and `type_name`; the rest is shown on
/// the room type management screen.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RoomType {
    pub id: i64,
    #[serde(alias = "name")]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_per_person: f64,
    #[serde(default)]
    pub min_capacity: u32,
    #[serde(default)]
    pub max_capacity: u32,
    /// Counted by the backend from the hotel's rooms
    #[serde(default)]
    pub total_rooms: u32,
    #[serde(default)]
    pub blockchain_reserved_rooms: u32,
    #[serde(default)]
    pub amenities: String,
}

impl RoomType {
    pub fn capacity_label(&self) -> String {
        format!("{} - {} persons", self.min_capacity, self.max_capacity)
    }
}

/// Name of the room type with `id`, or `N/A`
pub fn room_type_name(room_types: &[RoomType], id: i64) -> &str {
    room_types
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.type_name.as_str())
        .unwrap_or("N/A")
}

/// `GET /hotels/{id}/room-types`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoomTypesResponse {
    #[serde(rename = "roomTypes", alias = "room_types", default)]
    pub room_types: Vec<RoomType>,
}

/// One tile's geometry in a layout batch
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutUpdate {
    pub room_id: i64,
    pub layout_x: Option<i32>,
    pub layout_y: Option<i32>,
    pub layout_width: i32,
    pub layout_height: i32,
}

/// `PUT /hotels/{id}/layout` body
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutUpdateRequest {
    pub updates: Vec<LayoutUpdate>,
}

/// `PUT /hotels/{id}/layout` response
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LayoutUpdateResponse {
    #[serde(default)]
    pub updated_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_json() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "room_number": "201",
            "room_type_id": 3,
            "room_type_name": "Executive Boardroom",
            "floor": 2,
            "status": "OCCUPIED",
            "layout_x": null,
            "layout_y": null,
            "layout_width": 0,
            "layout_height": 0,
            "is_blockchain_enabled": true
        })
    }

    #[test]
    fn test_tile_decoding_and_defaults() {
        let tile: RoomTile = serde_json::from_value(tile_json()).unwrap();
        assert_eq!(tile.status, RoomStatus::Occupied);
        assert!(!tile.is_placed());
        assert_eq!(tile.display_position(), (0, 0));
        assert_eq!(tile.effective_width(), DEFAULT_TILE_WIDTH);
        assert_eq!(tile.effective_height(), DEFAULT_TILE_HEIGHT);
        assert_eq!(tile.short_type_name(), "Executive Bo...");
    }

    #[test]
    fn test_missing_size_fields_use_defaults() {
        let tile: RoomTile = serde_json::from_value(serde_json::json!({
            "id": 1,
            "room_number": "101",
            "floor": 1,
            "status": "AVAILABLE"
        }))
        .unwrap();
        assert_eq!(tile.layout_width, 100);
        assert_eq!(tile.layout_height, 70);
        assert!(!tile.is_blockchain_enabled);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: RoomStatus = serde_json::from_str("\"CLEANING\"").unwrap();
        assert_eq!(status, RoomStatus::Other("CLEANING".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"CLEANING\"");
        assert_eq!(status.tile_class(), "bg-blue-500");
    }

    #[test]
    fn test_missing_or_null_status_does_not_fail_floor() {
        let response: FloorLayoutResponse = serde_json::from_value(serde_json::json!({
            "floor": 1,
            "rooms": [
                { "id": 1, "room_number": "101", "floor": 1 },
                { "id": 2, "room_number": "102", "floor": 1, "status": null },
                { "id": 3, "room_number": "103", "floor": 1, "status": "occupied" }
            ]
        }))
        .unwrap();
        assert_eq!(response.rooms.len(), 3);
        assert_eq!(response.rooms[0].status, RoomStatus::default());
        assert_eq!(response.rooms[1].status, RoomStatus::Other(String::new()));
        assert_eq!(response.rooms[2].status, RoomStatus::Occupied);
    }

    #[test]
    fn test_derive_floors_sorted_and_distinct() {
        let rooms: Vec<HotelRoomSummary> = [3, 1, 2, 1, 3]
            .iter()
            .enumerate()
            .map(|(i, floor)| HotelRoomSummary {
                id: i as i64,
                room_number: format!("{}0{}", floor, i),
                floor: *floor,
                ..Default::default()
            })
            .collect();
        assert_eq!(derive_floors(&rooms), vec![1, 2, 3]);
        assert!(derive_floors(&[]).is_empty());
    }

    #[test]
    fn test_room_types_response_key() {
        let response: RoomTypesResponse = serde_json::from_value(serde_json::json!({
            "roomTypes": [{ "id": 1, "type_name": "Ballroom" }]
        }))
        .unwrap();
        assert_eq!(response.room_types[0].type_name, "Ballroom");
    }

    #[test]
    fn test_room_type_details_and_lookup() {
        let response: RoomTypesResponse = serde_json::from_value(serde_json::json!({
            "room_types": [{
                "id": 3,
                "type_name": "Meeting Package A",
                "price_per_person": 250000.0,
                "min_capacity": 10,
                "max_capacity": 40,
                "total_rooms": 4,
                "blockchain_reserved_rooms": 2
            }]
        }))
        .unwrap();
        let types = response.room_types;
        assert_eq!(types[0].capacity_label(), "10 - 40 persons");
        assert_eq!(types[0].description, "");
        assert_eq!(room_type_name(&types, 3), "Meeting Package A");
        assert_eq!(room_type_name(&types, 9), "N/A");
    }

    #[test]
    fn test_layout_update_wire_shape() {
        let tile: RoomTile = serde_json::from_value(tile_json()).unwrap();
        let body = LayoutUpdateRequest {
            updates: vec![tile.to_update()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "updates": [{
                    "room_id": 7,
                    "layout_x": null,
                    "layout_y": null,
                    "layout_width": 0,
                    "layout_height": 0
                }]
            })
        );
    }
}
