//! Authentication service

use crate::models::{LoginRequest, LoginResponse, SessionUser, UiResult};
use crate::services::api_client::ApiClient;
use crate::services::config::endpoints;
use crate::utils::validation::{validate_email, validate_password};

/// Where hotel staff land after logging in
pub const STAFF_HOME: &str = "/hotel-admin/room-layout";
/// Where everyone else lands
pub const GUEST_HOME: &str = "/hotels";

#[derive(Clone, PartialEq)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in and persist the token and user in the session
    pub async fn login(&self, email: &str, password: &str) -> UiResult<SessionUser> {
        validate_email(email)?;
        validate_password(password)?;

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .client
            .post_json(endpoints::LOGIN, &request, false)
            .await?;

        self.client
            .session()
            .store_login(&response.token, &response.user)?;
        Ok(response.user)
    }

    pub fn logout(&self) -> UiResult<()> {
        tracing::info!("logging out");
        self.client.session().clear()
    }

    /// Landing page for a freshly logged-in user
    pub fn home_for(user: &SessionUser) -> &'static str {
        if user.role.is_hotel_staff() {
            STAFF_HOME
        } else {
            GUEST_HOME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::testing::MockTransport;
    use crate::services::config::ApiConfig;
    use crate::services::session::Session;
    use std::rc::Rc;

    fn service() -> (AuthService, MockTransport, Session) {
        let session = Session::in_memory();
        let transport = MockTransport::default();
        let client = ApiClient::new(&ApiConfig::default(), session.clone(), Rc::new(transport.clone()));
        (AuthService::new(client), transport, session)
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let (auth, transport, session) = service();
        transport.respond(
            200,
            serde_json::json!({
                "token": "jwt-abc",
                "user": {
                    "id": 3,
                    "name": "Rina",
                    "email": "rina@hotel.id",
                    "role": "hotel_admin",
                    "hotel_id": 8
                }
            }),
        );

        let user = auth.login("rina@hotel.id", "secret").await.unwrap();
        assert_eq!(AuthService::home_for(&user), STAFF_HOME);
        assert_eq!(session.token().unwrap().as_deref(), Some("jwt-abc"));
        assert_eq!(session.hotel_id(), Some(8));
        assert!(transport.sent()[0].headers.get("Authorization").is_none());

        auth.logout().unwrap();
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_invalid_email_sends_nothing() {
        let (auth, transport, _) = service();
        let err = auth.login("not-an-email", "secret").await.unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let (auth, transport, session) = service();
        transport.respond(401, serde_json::json!({ "error": "Invalid credentials" }));

        let err = auth.login("rina@hotel.id", "wrong").await.unwrap_err();
        assert!(err.is_auth_error());
        assert!(!session.is_logged_in());
    }
}
