//! Authentication and session models

use serde::{Deserialize, Serialize};

/// Role attached to a logged-in account
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Customer,
    HotelAdmin,
    HotelSuperAdmin,
    Admin,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Customer => "customer",
            UserRole::HotelAdmin => "hotel_admin",
            UserRole::HotelSuperAdmin => "hotel_super_admin",
            UserRole::Admin => "admin",
            UserRole::Other(raw) => raw,
        }
    }

    /// Roles that manage a hotel's back office
    pub fn is_hotel_staff(&self) -> bool {
        matches!(self, UserRole::HotelAdmin | UserRole::HotelSuperAdmin)
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "customer" | "user" => UserRole::Customer,
            "hotel_admin" => UserRole::HotelAdmin,
            "hotel_super_admin" => UserRole::HotelSuperAdmin,
            "admin" => UserRole::Admin,
            _ => UserRole::Other(value),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// User object persisted next to the token after login
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    #[serde(default, alias = "full_name")]
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub hotel_id: Option<i64>,
}

/// Login request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Why a guarded page refused to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDenied {
    /// No token or user in the session
    NotLoggedIn,
    /// Logged in, but with a role the page does not accept
    InsufficientRole,
}

impl AccessDenied {
    /// Path the operator is sent to
    pub fn redirect_path(&self) -> &'static str {
        match self {
            AccessDenied::NotLoggedIn => "/login",
            AccessDenied::InsufficientRole => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_decoding() {
        let user: SessionUser = serde_json::from_value(serde_json::json!({
            "id": 12,
            "full_name": "Sari Wijaya",
            "email": "sari@hotel.id",
            "role": "hotel_super_admin",
            "hotel_id": 4
        }))
        .unwrap();

        assert_eq!(user.name, "Sari Wijaya");
        assert_eq!(user.role, UserRole::HotelSuperAdmin);
        assert!(user.role.is_hotel_staff());
        assert_eq!(user.hotel_id, Some(4));
    }

    #[test]
    fn test_role_round_trip_keeps_unknown_values() {
        let role = UserRole::from("auditor".to_string());
        assert_eq!(role, UserRole::Other("auditor".to_string()));
        assert!(!role.is_hotel_staff());
        assert_eq!(String::from(role), "auditor");
    }

    #[test]
    fn test_access_denied_redirects() {
        assert_eq!(AccessDenied::NotLoggedIn.redirect_path(), "/login");
        assert_eq!(AccessDenied::InsufficientRole.redirect_path(), "/");
    }
}
