//! Room and room type management forms
//!
//! Form fields are kept as the strings the inputs produce. `validate` turns
//! them into the request body, so nothing malformed is ever sent.

use serde::{Deserialize, Serialize};

use crate::models::{HotelRoomSummary, RoomStatus, RoomType, UiError, UiResult};

/// Statuses an operator can pick when editing a room
pub const EDITABLE_ROOM_STATUSES: [RoomStatus; 4] = [
    RoomStatus::Available,
    RoomStatus::Occupied,
    RoomStatus::Maintenance,
    RoomStatus::OutOfOrder,
];

/// Body of `POST /hotels/{id}/rooms` and `PUT /hotels/{id}/rooms/{room}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoomDraft {
    pub room_type_id: i64,
    pub room_number: String,
    pub floor: i32,
    pub is_blockchain_enabled: bool,
    pub status: RoomStatus,
}

/// Add/edit room form
#[derive(Clone, Debug, PartialEq)]
pub struct RoomForm {
    /// Room being edited; `None` when adding
    pub editing: Option<i64>,
    pub room_type_id: String,
    pub room_number: String,
    pub floor: String,
    pub is_blockchain_enabled: bool,
    pub status: RoomStatus,
}

impl RoomForm {
    /// Empty form preselecting the first room type
    pub fn new(room_types: &[RoomType]) -> Self {
        Self {
            editing: None,
            room_type_id: room_types
                .first()
                .map(|t| t.id.to_string())
                .unwrap_or_default(),
            room_number: String::new(),
            floor: String::new(),
            is_blockchain_enabled: true,
            status: RoomStatus::Available,
        }
    }

    pub fn edit(room: &HotelRoomSummary) -> Self {
        Self {
            editing: Some(room.id),
            room_type_id: room.room_type_id.to_string(),
            room_number: room.room_number.clone(),
            floor: room.floor.to_string(),
            is_blockchain_enabled: room.is_blockchain_enabled,
            status: room.status.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn validate(&self) -> UiResult<RoomDraft> {
        let room_number = self.room_number.trim();
        if room_number.is_empty() {
            return Err(UiError::validation_field("room_number", "Room number is required"));
        }
        let floor: i32 = self
            .floor
            .trim()
            .parse()
            .map_err(|_| UiError::validation_field("floor", "Floor must be a whole number"))?;
        if floor < 0 {
            return Err(UiError::validation_field("floor", "Floor cannot be negative"));
        }
        let room_type_id: i64 = self
            .room_type_id
            .trim()
            .parse()
            .map_err(|_| UiError::validation_field("room_type_id", "Choose a room type"))?;

        Ok(RoomDraft {
            room_type_id,
            room_number: room_number.to_string(),
            floor,
            is_blockchain_enabled: self.is_blockchain_enabled,
            status: self.status.clone(),
        })
    }
}

/// Body of `POST /hotels/{id}/room-types` and `PUT /hotels/{id}/room-types/{type}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoomTypeDraft {
    pub type_name: String,
    pub description: String,
    pub price_per_person: f64,
    pub min_capacity: u32,
    pub max_capacity: u32,
    pub amenities: String,
}

/// Add/edit room type form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomTypeForm {
    pub editing: Option<i64>,
    pub type_name: String,
    pub description: String,
    pub price_per_person: String,
    pub min_capacity: String,
    pub max_capacity: String,
    pub amenities: String,
}

impl RoomTypeForm {
    pub fn edit(room_type: &RoomType) -> Self {
        Self {
            editing: Some(room_type.id),
            type_name: room_type.type_name.clone(),
            description: room_type.description.clone(),
            price_per_person: room_type.price_per_person.to_string(),
            min_capacity: room_type.min_capacity.to_string(),
            max_capacity: room_type.max_capacity.to_string(),
            amenities: room_type.amenities.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn validate(&self) -> UiResult<RoomTypeDraft> {
        let type_name = self.type_name.trim();
        if type_name.is_empty() {
            return Err(UiError::validation_field("type_name", "Type name is required"));
        }
        let price_per_person: f64 = self
            .price_per_person
            .trim()
            .parse()
            .ok()
            .filter(|price: &f64| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| {
                UiError::validation_field("price_per_person", "Price must be zero or more")
            })?;
        let capacity = |field: &str, value: &str| -> UiResult<u32> {
            value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| UiError::validation_field(field, "Capacity must be at least 1"))
        };
        let min_capacity = capacity("min_capacity", &self.min_capacity)?;
        let max_capacity = capacity("max_capacity", &self.max_capacity)?;
        if max_capacity < min_capacity {
            return Err(UiError::validation_field(
                "max_capacity",
                "Max capacity cannot be below min capacity",
            ));
        }

        Ok(RoomTypeDraft {
            type_name: type_name.to_string(),
            description: self.description.trim().to_string(),
            price_per_person,
            min_capacity,
            max_capacity,
            amenities: self.amenities.trim().to_string(),
        })
    }
}

/// `{"message": "..."}` returned by back-office mutations
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ActionMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionMessage {
    pub fn or(self, fallback: &str) -> String {
        self.message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite() -> RoomType {
        RoomType {
            id: 7,
            type_name: "Suite".to_string(),
            price_per_person: 150000.0,
            min_capacity: 2,
            max_capacity: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_room_form_defaults() {
        let form = RoomForm::new(&[suite()]);
        assert_eq!(form.room_type_id, "7");
        assert!(form.is_blockchain_enabled);
        assert_eq!(form.status, RoomStatus::Available);
        assert!(!form.is_editing());

        assert_eq!(RoomForm::new(&[]).room_type_id, "");
    }

    #[test]
    fn test_room_form_validation() {
        let mut form = RoomForm::new(&[suite()]);
        form.room_number = " 102A ".to_string();
        form.floor = "3".to_string();
        let draft = form.validate().unwrap();
        assert_eq!(draft.room_number, "102A");
        assert_eq!(draft.floor, 3);
        assert_eq!(draft.room_type_id, 7);

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["status"], "AVAILABLE");
        assert_eq!(json["is_blockchain_enabled"], true);

        for (number, floor, type_id) in [("", "1", "7"), ("101", "x", "7"), ("101", "-1", "7"), ("101", "1", "")] {
            let form = RoomForm {
                room_number: number.to_string(),
                floor: floor.to_string(),
                room_type_id: type_id.to_string(),
                ..form.clone()
            };
            assert!(form.validate().unwrap_err().is_validation_error());
        }
    }

    #[test]
    fn test_edit_room_keeps_values() {
        let room = HotelRoomSummary {
            id: 11,
            room_number: "305".to_string(),
            floor: 3,
            room_type_id: 7,
            status: RoomStatus::Maintenance,
            is_blockchain_enabled: false,
        };
        let form = RoomForm::edit(&room);
        assert_eq!(form.editing, Some(11));
        let draft = form.validate().unwrap();
        assert_eq!(draft.status, RoomStatus::Maintenance);
        assert!(!draft.is_blockchain_enabled);
    }

    #[test]
    fn test_room_type_form_validation() {
        let form = RoomTypeForm::edit(&suite());
        let draft = form.validate().unwrap();
        assert_eq!(draft.price_per_person, 150000.0);
        assert_eq!((draft.min_capacity, draft.max_capacity), (2, 4));

        let bad = [
            RoomTypeForm { type_name: " ".to_string(), ..form.clone() },
            RoomTypeForm { price_per_person: "-5".to_string(), ..form.clone() },
            RoomTypeForm { price_per_person: "abc".to_string(), ..form.clone() },
            RoomTypeForm { min_capacity: "0".to_string(), ..form.clone() },
            RoomTypeForm { max_capacity: "1".to_string(), ..form.clone() },
        ];
        for form in bad {
            assert!(form.validate().is_err(), "{form:?} should be rejected");
        }
    }

    #[test]
    fn test_action_message_fallback() {
        let empty: ActionMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.or("Room saved successfully"), "Room saved successfully");
        let given: ActionMessage = serde_json::from_str(r#"{"message":"Room created"}"#).unwrap();
        assert_eq!(given.or("Room saved successfully"), "Room created");
    }
}
