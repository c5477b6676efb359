//! Session context shared by every page

use dioxus::prelude::*;

use crate::models::{AccessDenied, SessionUser, UserRole};
use crate::services::{ApiClient, ApiConfig, AuthService, Session};

/// Logged-in user plus the API client built around the stored token
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    client: ApiClient,
    pub user: Signal<Option<SessionUser>>,
}

impl SessionContext {
    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.user.read().clone()
    }

    pub fn on_login(&mut self, user: SessionUser) {
        self.user.set(Some(user));
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.auth_service().logout() {
            tracing::warn!("failed to clear session: {e}");
        }
        self.user.set(None);
    }
}

/// Install the session context at the root of the app
pub fn use_session_provider() -> SessionContext {
    let session = use_hook(Session::browser);
    let user = use_signal({
        let session = session.clone();
        move || session.user().ok().flatten()
    });
    use_context_provider(move || SessionContext {
        client: ApiClient::for_browser(&ApiConfig::from_env(), session),
        user,
    })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// The logged-in user if their role is in `allowed`
///
/// Anyone else is sent to the login page or the home page.
pub fn use_require_role(allowed: &'static [UserRole]) -> Option<SessionUser> {
    let context = use_session();
    use_access_redirect(context.session().require_role(allowed))
}

/// The logged-in user; visitors are sent to the login page
pub fn use_require_login() -> Option<SessionUser> {
    let context = use_session();
    use_access_redirect(context.session().require_user())
}

fn use_access_redirect(access: Result<SessionUser, AccessDenied>) -> Option<SessionUser> {
    let navigator = use_navigator();
    let redirect = access.as_ref().err().map(AccessDenied::redirect_path);
    use_effect(move || {
        if let Some(path) = redirect {
            tracing::info!(path, "redirecting unauthorized visitor");
            navigator.replace(path);
        }
    });

    access.ok()
}
