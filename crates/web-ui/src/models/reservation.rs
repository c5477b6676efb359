//! Reservation models for the guest booking screens

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle of a reservation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Other(String),
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::CheckedIn => "CHECKED_IN",
            ReservationStatus::CheckedOut => "CHECKED_OUT",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Other(raw) => raw,
        }
    }

    /// Badge colors
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "bg-yellow-100 text-yellow-800",
            ReservationStatus::Confirmed => "bg-blue-100 text-blue-800",
            ReservationStatus::CheckedIn => "bg-green-100 text-green-800",
            ReservationStatus::CheckedOut | ReservationStatus::Other(_) => "bg-gray-100 text-gray-800",
            ReservationStatus::Cancelled => "bg-red-100 text-red-800",
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "PENDING" => ReservationStatus::Pending,
            "CONFIRMED" => ReservationStatus::Confirmed,
            "CHECKED_IN" => ReservationStatus::CheckedIn,
            "CHECKED_OUT" => ReservationStatus::CheckedOut,
            "CANCELLED" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Other(value),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hotel embedded in a reservation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReservationHotel {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f32,
}

/// Package (room type) embedded in a reservation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReservationPackage {
    pub id: i64,
    #[serde(default)]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Reservation {
    pub id: i64,
    /// Public booking reference, also the ledger key
    pub reservation_id: String,
    #[serde(default)]
    pub hotel_id: i64,
    #[serde(default)]
    pub room_type_id: i64,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub event_description: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: String,
    /// Company or organization
    #[serde(default)]
    pub customer_ref: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price_per_person: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub hotel: Option<ReservationHotel>,
    #[serde(default)]
    pub room_type: Option<ReservationPackage>,
}

impl Reservation {
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        parse_date(&self.check_in)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    pub fn hotel_name(&self) -> &str {
        self.hotel.as_ref().map(|h| h.name.as_str()).unwrap_or("-")
    }

    pub fn package_name(&self) -> &str {
        self.room_type
            .as_ref()
            .map(|t| t.type_name.as_str())
            .unwrap_or("-")
    }
}

/// `YYYY-MM-DD`, with or without a time part
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// `12 March 2025`; unparsable dates are shown raw
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Tabs on the bookings list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingFilter {
    #[default]
    All,
    Upcoming,
    Past,
    Cancelled,
}

impl BookingFilter {
    pub const ALL: [BookingFilter; 4] = [
        BookingFilter::All,
        BookingFilter::Upcoming,
        BookingFilter::Past,
        BookingFilter::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingFilter::All => "All",
            BookingFilter::Upcoming => "Upcoming",
            BookingFilter::Past => "Past",
            BookingFilter::Cancelled => "Cancelled",
        }
    }

    /// Upcoming and past compare check-in with `today` and skip cancelled bookings
    pub fn matches(&self, reservation: &Reservation, today: NaiveDate) -> bool {
        match self {
            BookingFilter::All => true,
            BookingFilter::Cancelled => reservation.is_cancelled(),
            BookingFilter::Upcoming => {
                !reservation.is_cancelled()
                    && reservation.check_in_date().is_some_and(|d| d >= today)
            }
            BookingFilter::Past => {
                !reservation.is_cancelled()
                    && reservation.check_in_date().is_some_and(|d| d < today)
            }
        }
    }

    pub fn empty_message(&self) -> String {
        match self {
            BookingFilter::All => "You haven't made any bookings yet.".to_string(),
            other => format!("No {} bookings found.", other.label().to_lowercase()),
        }
    }
}

pub fn filter_bookings<'a>(
    reservations: &'a [Reservation],
    filter: BookingFilter,
    today: NaiveDate,
) -> Vec<&'a Reservation> {
    reservations
        .iter()
        .filter(|r| filter.matches(r, today))
        .collect()
}

/// `GET /reservations/user/my-bookings`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ReservationsResponse {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// `GET /reservations/{reservation_id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ReservationResponse {
    #[serde(default)]
    pub reservation: Option<Reservation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(check_in: &str, status: &str) -> Reservation {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "reservation_id": "RSV-001",
            "check_in": check_in,
            "check_out": check_in,
            "status": status
        }))
        .unwrap()
    }

    #[test]
    fn test_reservation_decoding() {
        let reservation: Reservation = serde_json::from_value(serde_json::json!({
            "id": 9,
            "reservation_id": "RSV-20250301-9",
            "hotel_id": 4,
            "room_type_id": 2,
            "check_in": "2025-03-12T00:00:00Z",
            "check_out": "2025-03-13T00:00:00Z",
            "guest_count": 25,
            "price_per_person": null,
            "total_price": 6250000,
            "status": "confirmed",
            "hotel": { "id": 4, "name": "Grand Bandung", "city": "Bandung", "rating": 4.5 },
            "room_type": { "id": 2, "type_name": "Full Day Meeting" }
        }))
        .unwrap();

        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.price_per_person, 0.0);
        assert_eq!(reservation.hotel_name(), "Grand Bandung");
        assert_eq!(reservation.package_name(), "Full Day Meeting");
        assert_eq!(reservation.check_in_date(), NaiveDate::from_ymd_opt(2025, 3, 12));
        assert_eq!(format_long_date(&reservation.check_in), "12 March 2025");
    }

    #[test]
    fn test_booking_filters() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let bookings = vec![
            booking("2025-03-10", "PENDING"),
            booking("2025-03-01", "CHECKED_OUT"),
            booking("2025-04-01", "CANCELLED"),
            booking("not a date", "CONFIRMED"),
        ];

        assert_eq!(filter_bookings(&bookings, BookingFilter::All, today).len(), 4);
        let upcoming = filter_bookings(&bookings, BookingFilter::Upcoming, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].check_in, "2025-03-10");
        assert_eq!(filter_bookings(&bookings, BookingFilter::Past, today).len(), 1);
        assert_eq!(filter_bookings(&bookings, BookingFilter::Cancelled, today).len(), 1);
    }

    #[test]
    fn test_filter_empty_messages() {
        assert_eq!(BookingFilter::All.empty_message(), "You haven't made any bookings yet.");
        assert_eq!(BookingFilter::Past.empty_message(), "No past bookings found.");
    }

    #[test]
    fn test_missing_reservation_body() {
        let response: ReservationResponse = serde_json::from_str(r#"{"error":"not found"}"#).unwrap();
        assert!(response.reservation.is_none());
        assert_eq!(format_long_date("soon"), "soon");
    }
}
