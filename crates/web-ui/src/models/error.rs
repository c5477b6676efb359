//! Error handling models and utilities

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the BuatEvent frontend
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiError {
    /// Input rejected before any request was sent
    #[error("Validation failed: {message}")]
    ValidationError { message: String, field: Option<String> },

    /// Missing or rejected credentials
    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    /// Authenticated, but the role is not allowed to do this
    #[error("Access denied: {message}")]
    PermissionError { message: String },

    /// Backend answered with a non-success status
    #[error("API request failed: {message}")]
    ApiError { message: String, status_code: Option<u16> },

    /// Request never reached the backend or the connection broke
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Response body could not be decoded
    #[error("Parsing error: {message}")]
    ParseError { message: String, format: String },

    /// Browser storage could not be read or written
    #[error("Storage error: {message}")]
    StorageError { message: String },

    /// Client-side errors (frontend specific)
    #[error("Client error: {message}")]
    ClientError { message: String },
}

/// Result type alias for frontend operations
pub type UiResult<T> = Result<T, UiError>;

impl UiError {
    /// Get the HTTP status code this error corresponds to
    pub fn status_code(&self) -> u16 {
        match self {
            UiError::ValidationError { .. } => 400,
            UiError::AuthError { .. } => 401,
            UiError::PermissionError { .. } => 403,
            UiError::ApiError { status_code: Some(code), .. } => *code,
            UiError::ApiError { .. } => 500,
            UiError::NetworkError { .. } => 503,
            UiError::ParseError { .. } => 400,
            UiError::StorageError { .. } => 500,
            UiError::ClientError { .. } => 400,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            UiError::ValidationError { message, field } => {
                if let Some(field) = field {
                    format!("Invalid value for '{}': {}", field, message)
                } else {
                    format!("Invalid input: {}", message)
                }
            }
            UiError::AuthError { message } => format!("Please log in again: {}", message),
            UiError::PermissionError { message } => format!("Permission denied: {}", message),
            UiError::ApiError { message, .. } => format!("Server error: {}", message),
            UiError::NetworkError { message } => {
                format!("Could not reach the server: {}", message)
            }
            UiError::ParseError { message, format } => {
                format!("Unexpected {} response: {}", format, message)
            }
            UiError::StorageError { message } => format!("Browser storage error: {}", message),
            UiError::ClientError { message } => message.clone(),
        }
    }

    /// Get error code for logs and notifications
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::ValidationError { .. } => "VALIDATION_ERROR",
            UiError::AuthError { .. } => "AUTH_ERROR",
            UiError::PermissionError { .. } => "PERMISSION_ERROR",
            UiError::ApiError { .. } => "API_ERROR",
            UiError::NetworkError { .. } => "NETWORK_ERROR",
            UiError::ParseError { .. } => "PARSE_ERROR",
            UiError::StorageError { .. } => "STORAGE_ERROR",
            UiError::ClientError { .. } => "CLIENT_ERROR",
        }
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, UiError::AuthError { .. })
            || matches!(self, UiError::ApiError { status_code: Some(401), .. })
    }

    /// Check if this is a permission error
    pub fn is_permission_error(&self) -> bool {
        matches!(self, UiError::PermissionError { .. })
            || matches!(self, UiError::ApiError { status_code: Some(403), .. })
    }

    /// Check if this error was raised before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(self, UiError::ValidationError { .. })
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::ParseError {
            message: err.to_string(),
            format: "JSON".to_string(),
        }
    }
}

/// Helper functions for error creation
impl UiError {
    pub fn validation(message: impl Into<String>) -> Self {
        UiError::ValidationError {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        UiError::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        UiError::AuthError {
            message: message.into(),
        }
    }

    pub fn permission(message: impl Into<String>) -> Self {
        UiError::PermissionError {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        UiError::ApiError {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn api_with_status(message: impl Into<String>, status_code: u16) -> Self {
        UiError::ApiError {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        UiError::NetworkError {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>, format: impl Into<String>) -> Self {
        UiError::ParseError {
            message: message.into(),
            format: format.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        UiError::StorageError {
            message: message.into(),
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        UiError::ClientError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(UiError::validation("x").status_code(), 400);
        assert_eq!(UiError::auth("x").status_code(), 401);
        assert_eq!(UiError::permission("x").status_code(), 403);
        assert_eq!(UiError::api_with_status("x", 404).status_code(), 404);
        assert_eq!(UiError::api("x").status_code(), 500);
        assert_eq!(UiError::network("x").status_code(), 503);
    }

    #[test]
    fn test_error_user_messages() {
        let error = UiError::validation_field("columns", "must be at least 1");
        assert_eq!(
            error.user_message(),
            "Invalid value for 'columns': must be at least 1"
        );

        let error = UiError::network("connection refused");
        assert_eq!(
            error.user_message(),
            "Could not reach the server: connection refused"
        );

        assert_eq!(UiError::client("Layout saved").user_message(), "Layout saved");
    }

    #[test]
    fn test_error_type_checking() {
        assert!(UiError::auth("x").is_auth_error());
        assert!(UiError::api_with_status("x", 401).is_auth_error());
        assert!(!UiError::api_with_status("x", 500).is_auth_error());

        assert!(UiError::permission("x").is_permission_error());
        assert!(UiError::api_with_status("x", 403).is_permission_error());

        assert!(UiError::validation("x").is_validation_error());
        assert!(!UiError::network("x").is_validation_error());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let error: UiError = json_error.into();

        match error {
            UiError::ParseError { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let error = UiError::api_with_status("Failed to save layout", 500);
        assert_eq!(error.to_string(), "API request failed: Failed to save layout");
        assert_eq!(error.error_code(), "API_ERROR");
    }
}
