//! Bookable rooms with availability and category-specific pricing

use serde::{Deserialize, Serialize};

/// Meeting-room booking package
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeetingPackage {
    Hourly,
    HalfDay,
    FullDay,
}

/// How a meeting room is billed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    PerHour,
    HalfDay,
    FullDay,
    #[serde(other)]
    Session,
}

/// Room category, decoded once from the backend's flat fields
#[derive(Clone, Debug, PartialEq)]
pub enum RoomCategory {
    HotelRoom {
        price_per_person: f64,
    },
    MeetingRoom {
        pricing_type: PricingType,
        hourly_rate: Option<f64>,
        half_day_rate: Option<f64>,
        full_day_rate: Option<f64>,
    },
}

impl RoomCategory {
    pub fn is_meeting_room(&self) -> bool {
        matches!(self, RoomCategory::MeetingRoom { .. })
    }

    /// Price shown for this room; `package` only matters for meeting rooms
    pub fn price_for(&self, package: Option<MeetingPackage>) -> f64 {
        match self {
            RoomCategory::HotelRoom { price_per_person } => *price_per_person,
            RoomCategory::MeetingRoom {
                hourly_rate,
                half_day_rate,
                full_day_rate,
                ..
            } => {
                let chosen = match package {
                    Some(MeetingPackage::Hourly) => *hourly_rate,
                    Some(MeetingPackage::HalfDay) => *half_day_rate,
                    Some(MeetingPackage::FullDay) => *full_day_rate,
                    None => None,
                };
                chosen
                    .or(*hourly_rate)
                    .or(*half_day_rate)
                    .or(*full_day_rate)
                    .unwrap_or(0.0)
            }
        }
    }

    pub fn price_label(&self) -> &'static str {
        match self {
            RoomCategory::HotelRoom { .. } => "/room",
            RoomCategory::MeetingRoom { pricing_type, .. } => match pricing_type {
                PricingType::PerHour => "/hour",
                PricingType::HalfDay => "/half-day",
                PricingType::FullDay => "/full-day",
                PricingType::Session => "/session",
            },
        }
    }
}

/// Wire shape of `GET /hotels/{id}/rooms-with-status` entries
#[derive(Deserialize, Clone, Debug)]
struct RoomRecord {
    id: i64,
    room_number: String,
    floor: i32,
    #[serde(default)]
    type_name: String,
    #[serde(default)]
    max_capacity: u32,
    #[serde(default)]
    room_category: Option<String>,
    #[serde(default)]
    pricing_type: Option<PricingType>,
    #[serde(default)]
    price_per_person: Option<f64>,
    #[serde(default)]
    hourly_rate: Option<f64>,
    #[serde(default)]
    half_day_rate: Option<f64>,
    #[serde(default)]
    full_day_rate: Option<f64>,
    #[serde(default)]
    is_available: bool,
    #[serde(default)]
    is_booked: bool,
}

/// A room that can be picked in the booking grid
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "RoomRecord")]
pub struct BookableRoom {
    pub id: i64,
    pub room_number: String,
    pub floor: i32,
    pub type_name: String,
    pub max_capacity: u32,
    pub category: RoomCategory,
    pub is_available: bool,
    pub is_booked: bool,
}

impl From<RoomRecord> for BookableRoom {
    fn from(record: RoomRecord) -> Self {
        let category = match record.room_category.as_deref() {
            Some("meeting_room") => RoomCategory::MeetingRoom {
                pricing_type: record.pricing_type.unwrap_or(PricingType::Session),
                hourly_rate: record.hourly_rate,
                half_day_rate: record.half_day_rate,
                full_day_rate: record.full_day_rate,
            },
            // Rooms without a category predate meeting rooms
            _ => RoomCategory::HotelRoom {
                price_per_person: record.price_per_person.unwrap_or(0.0),
            },
        };

        Self {
            id: record.id,
            room_number: record.room_number,
            floor: record.floor,
            type_name: record.type_name,
            max_capacity: record.max_capacity,
            category,
            is_available: record.is_available,
            is_booked: record.is_booked,
        }
    }
}

impl BookableRoom {
    /// A room can be selected only when free and not already booked
    pub fn is_selectable(&self) -> bool {
        self.is_available && !self.is_booked
    }
}

/// `GET /hotels/{id}/rooms-with-status`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RoomsWithStatusResponse {
    #[serde(default)]
    pub rooms: Vec<BookableRoom>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_room_category() {
        let room: BookableRoom = serde_json::from_value(serde_json::json!({
            "id": 1,
            "room_number": "101",
            "floor": 1,
            "type_name": "Deluxe",
            "max_capacity": 2,
            "room_category": "hotel_room",
            "price_per_person": 750000.0,
            "is_available": true,
            "is_booked": false
        }))
        .unwrap();

        assert!(!room.category.is_meeting_room());
        assert_eq!(room.category.price_for(Some(MeetingPackage::FullDay)), 750000.0);
        assert_eq!(room.category.price_label(), "/room");
        assert!(room.is_selectable());
    }

    #[test]
    fn test_missing_category_defaults_to_hotel_room() {
        let room: BookableRoom = serde_json::from_value(serde_json::json!({
            "id": 2,
            "room_number": "102",
            "floor": 1,
            "is_available": true,
            "is_booked": true
        }))
        .unwrap();

        assert_eq!(room.category, RoomCategory::HotelRoom { price_per_person: 0.0 });
        assert!(!room.is_selectable());
    }

    #[test]
    fn test_meeting_room_package_pricing() {
        let room: BookableRoom = serde_json::from_value(serde_json::json!({
            "id": 3,
            "room_number": "M1",
            "floor": 3,
            "room_category": "meeting_room",
            "pricing_type": "half_day",
            "hourly_rate": null,
            "half_day_rate": 1200000.0,
            "full_day_rate": 2000000.0,
            "is_available": true
        }))
        .unwrap();

        assert!(room.category.is_meeting_room());
        assert_eq!(room.category.price_label(), "/half-day");
        assert_eq!(room.category.price_for(Some(MeetingPackage::FullDay)), 2000000.0);
        // No hourly rate: falls through to the next available one
        assert_eq!(room.category.price_for(Some(MeetingPackage::Hourly)), 1200000.0);
        assert_eq!(room.category.price_for(None), 1200000.0);
    }

    #[test]
    fn test_unknown_pricing_type_is_session() {
        let pricing: PricingType = serde_json::from_str("\"per_event\"").unwrap();
        assert_eq!(pricing, PricingType::Session);
    }
}
