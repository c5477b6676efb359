//! Session persistence and typed accessors
//!
//! The token and user object live in browser local storage under the keys
//! `token` and `user`. Components never touch storage directly; they go
//! through [`Session`].

use crate::models::{AccessDenied, SessionUser, UiResult, UserRole};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Key/value storage backing a session
pub trait SessionStore {
    fn get(&self, key: &str) -> UiResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> UiResult<()>;
    fn remove(&self, key: &str) -> UiResult<()>;
}

/// Browser local storage
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> UiResult<Option<String>> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| crate::models::UiError::storage(format!("Failed to read '{}'", key)))
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| crate::models::UiError::storage(format!("Failed to write '{}'", key)))
    }

    fn remove(&self, key: &str) -> UiResult<()> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| crate::models::UiError::storage(format!("Failed to remove '{}'", key)))
    }
}

/// In-memory storage for native builds and tests
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> UiResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> UiResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Shared handle to the current login
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by local storage in the browser, memory elsewhere
    pub fn browser() -> Self {
        #[cfg(target_arch = "wasm32")]
        let store: Rc<dyn SessionStore> = Rc::new(LocalStore);
        #[cfg(not(target_arch = "wasm32"))]
        let store: Rc<dyn SessionStore> = Rc::new(MemoryStore::default());
        Self::new(store)
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::default()))
    }

    /// Bearer token, if logged in
    pub fn token(&self) -> UiResult<Option<String>> {
        Ok(self.store.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// Stored user object, if logged in
    pub fn user(&self) -> UiResult<Option<SessionUser>> {
        match self.store.get(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user().ok().flatten().map(|u| u.role)
    }

    pub fn hotel_id(&self) -> Option<i64> {
        self.user().ok().flatten().and_then(|u| u.hotel_id)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Persist a fresh login
    pub fn store_login(&self, token: &str, user: &SessionUser) -> UiResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user_json)?;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "session stored");
        Ok(())
    }

    pub fn clear(&self) -> UiResult<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }

    /// Current user, whatever their role
    ///
    /// An unreadable user object counts as not logged in.
    pub fn require_user(&self) -> Result<SessionUser, AccessDenied> {
        match (self.token(), self.user()) {
            (Ok(Some(_)), Ok(Some(user))) => Ok(user),
            (_, Err(e)) => {
                tracing::warn!(error = %e, "discarding unreadable session user");
                Err(AccessDenied::NotLoggedIn)
            }
            _ => Err(AccessDenied::NotLoggedIn),
        }
    }

    /// Current user if logged in with one of `allowed`
    pub fn require_role(&self, allowed: &[UserRole]) -> Result<SessionUser, AccessDenied> {
        let user = self.require_user()?;
        if allowed.contains(&user.role) {
            Ok(user)
        } else {
            Err(AccessDenied::InsufficientRole)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            id: 5,
            name: "Budi".to_string(),
            email: "budi@hotel.id".to_string(),
            role: UserRole::HotelAdmin,
            hotel_id: Some(3),
        }
    }

    const STAFF: &[UserRole] = &[UserRole::HotelAdmin, UserRole::HotelSuperAdmin];

    #[test]
    fn test_login_round_trip() {
        let session = Session::in_memory();
        assert!(!session.is_logged_in());
        assert_eq!(session.user().unwrap(), None);

        session.store_login("tok-123", &admin()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.token().unwrap().as_deref(), Some("tok-123"));
        assert_eq!(session.hotel_id(), Some(3));
        assert_eq!(session.role(), Some(UserRole::HotelAdmin));

        session.clear().unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(session.hotel_id(), None);
    }

    #[test]
    fn test_require_role() {
        let session = Session::in_memory();
        assert_eq!(session.require_role(STAFF), Err(AccessDenied::NotLoggedIn));

        let mut customer = admin();
        customer.role = UserRole::Customer;
        session.store_login("tok", &customer).unwrap();
        assert_eq!(session.require_role(STAFF), Err(AccessDenied::InsufficientRole));

        session.store_login("tok", &admin()).unwrap();
        assert_eq!(session.require_role(STAFF).unwrap().id, 5);
    }

    #[test]
    fn test_require_user_accepts_any_role() {
        let session = Session::in_memory();
        assert_eq!(session.require_user(), Err(AccessDenied::NotLoggedIn));

        let mut guest = admin();
        guest.role = UserRole::Other("event_planner".to_string());
        session.store_login("tok", &guest).unwrap();
        assert_eq!(session.require_user().unwrap().role, guest.role);
    }

    #[test]
    fn test_user_without_token_is_not_logged_in() {
        let store = MemoryStore::default();
        store
            .set(USER_KEY, &serde_json::to_string(&admin()).unwrap())
            .unwrap();
        let session = Session::new(Rc::new(store));
        assert_eq!(session.require_role(STAFF), Err(AccessDenied::NotLoggedIn));
    }

    #[test]
    fn test_corrupt_user_is_not_logged_in() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{not json").unwrap();
        let session = Session::new(Rc::new(store));

        assert!(session.user().is_err());
        assert_eq!(session.require_role(STAFF), Err(AccessDenied::NotLoggedIn));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store() {
        let store = LocalStore;
        store.set("buatevent_test_key", "value").unwrap();
        assert_eq!(store.get("buatevent_test_key").unwrap().as_deref(), Some("value"));
        store.remove("buatevent_test_key").unwrap();
        assert_eq!(store.get("buatevent_test_key").unwrap(), None);
    }
}
