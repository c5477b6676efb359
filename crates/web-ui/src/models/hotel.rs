//! Hotel models

use serde::{Deserialize, Serialize};

/// Shown when a hotel has no image of its own
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Hotel {
    pub fn image_or_fallback(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => FALLBACK_IMAGE_URL,
        }
    }

    /// Case-insensitive match on name, city or address
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.city.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}

/// `GET /hotels`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HotelsResponse {
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}

/// `GET /hotels/{id}`; older backends return the hotel unwrapped
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum HotelResponse {
    Wrapped { hotel: Hotel },
    Bare(Hotel),
}

impl HotelResponse {
    pub fn into_hotel(self) -> Hotel {
        match self {
            HotelResponse::Wrapped { hotel } => hotel,
            HotelResponse::Bare(hotel) => hotel,
        }
    }
}

/// Distinct cities in first-seen order, led by "All"
pub fn city_options(hotels: &[Hotel]) -> Vec<String> {
    let mut cities = vec!["All".to_string()];
    for hotel in hotels {
        if !cities.iter().any(|c| c == &hotel.city) {
            cities.push(hotel.city.clone());
        }
    }
    cities
}

/// Apply the city dropdown and the search box
pub fn filter_hotels<'a>(hotels: &'a [Hotel], city: &str, query: &str) -> Vec<&'a Hotel> {
    hotels
        .iter()
        .filter(|h| city == "All" || h.city == city)
        .filter(|h| h.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: i64, name: &str, city: &str) -> Hotel {
        Hotel {
            id,
            name: name.to_string(),
            city: city.to_string(),
            address: format!("Jl. Sudirman {}", id),
            rating: 4.5,
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_filtering_by_city_and_query() {
        let hotels = vec![
            hotel(1, "Grand Hyatt", "Jakarta"),
            hotel(2, "Ayana", "Bali"),
            hotel(3, "Mulia", "Jakarta"),
        ];

        assert_eq!(city_options(&hotels), vec!["All", "Jakarta", "Bali"]);
        assert_eq!(filter_hotels(&hotels, "Jakarta", "").len(), 2);
        assert_eq!(filter_hotels(&hotels, "All", "ayana")[0].id, 2);
        assert_eq!(filter_hotels(&hotels, "All", "sudirman 3")[0].id, 3);
        assert!(filter_hotels(&hotels, "Bali", "mulia").is_empty());
    }

    #[test]
    fn test_hotel_response_shapes() {
        let wrapped: HotelResponse = serde_json::from_value(serde_json::json!({
            "hotel": { "id": 1, "name": "Ayana" }
        }))
        .unwrap();
        assert_eq!(wrapped.into_hotel().name, "Ayana");

        let bare: HotelResponse =
            serde_json::from_value(serde_json::json!({ "id": 2, "name": "Mulia" })).unwrap();
        assert_eq!(bare.into_hotel().id, 2);
    }

    #[test]
    fn test_image_fallback() {
        let mut h = hotel(1, "Ayana", "Bali");
        assert_eq!(h.image_or_fallback(), FALLBACK_IMAGE_URL);
        h.image_url = Some("https://cdn.example/ayana.jpg".to_string());
        assert_eq!(h.image_or_fallback(), "https://cdn.example/ayana.jpg");
    }
}
