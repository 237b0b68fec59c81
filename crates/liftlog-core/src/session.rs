//! Session store — the identity boundary.
//!
//! Owns the authenticated user record, mirrors it into durable storage on
//! every mutation, and rehydrates it at startup. Never touches the catalog
//! or workout stores.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use liftlog_types::user::{Credentials, SignupProfile, User, UserUpdate};
use liftlog_types::{Result, StoreError};

use crate::loading::LoadingFlag;
use crate::ports::{GatewayPort, NavigatorPort, StoragePort};

pub const USER_KEY: &str = "user";
pub const AUTH_KEY: &str = "isAuthenticated";

pub struct SessionStore {
    user: RefCell<Option<User>>,
    is_authenticated: Cell<bool>,
    pub loading: LoadingFlag,
    error: RefCell<Option<String>>,
    gateway: Rc<dyn GatewayPort>,
    storage: Rc<dyn StoragePort>,
    navigator: Rc<dyn NavigatorPort>,
}

impl SessionStore {
    pub fn new(
        gateway: Rc<dyn GatewayPort>,
        storage: Rc<dyn StoragePort>,
        navigator: Rc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            user: RefCell::new(None),
            is_authenticated: Cell::new(false),
            loading: LoadingFlag::new(),
            error: RefCell::new(None),
            gateway,
            storage,
            navigator,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_authenticated.get()
    }

    pub fn username(&self) -> String {
        self.user
            .borrow()
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        self.user
            .borrow()
            .as_ref()
            .map(User::full_name)
            .unwrap_or_default()
    }

    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Adopt a backend-confirmed user record and mirror it to storage.
    /// The in-memory session is the source of truth; storage failures are
    /// logged, never surfaced.
    async fn adopt(&self, user: User) {
        let json = serde_json::to_string(&user).ok();
        *self.user.borrow_mut() = Some(user);
        self.is_authenticated.set(true);

        if let Some(json) = json {
            if let Err(e) = self.storage.set(USER_KEY, &json).await {
                log::warn!("failed to persist user record: {e}");
            }
        }
        if let Err(e) = self.storage.set(AUTH_KEY, "true").await {
            log::warn!("failed to persist auth flag: {e}");
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.login_user(credentials).await {
            Ok(user) => {
                self.adopt(user.clone()).await;
                Ok(user)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn signup(&self, profile: &SignupProfile) -> Result<User> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.create_user(profile).await {
            Ok(user) => {
                self.adopt(user.clone()).await;
                Ok(user)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Rehydrate the session from durable storage. An unparseable user
    /// record is treated as corrupted state and forces a full logout rather
    /// than leaving anything partially applied.
    pub async fn restore_session(&self) {
        let stored_user = self.storage.get(USER_KEY).await.ok().flatten();
        let auth_flag = self.storage.get(AUTH_KEY).await.ok().flatten();

        let (Some(raw), Some(flag)) = (stored_user, auth_flag) else {
            return;
        };
        if flag != "true" {
            return;
        }

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                *self.user.borrow_mut() = Some(user);
                self.is_authenticated.set(true);
                log::info!("session restored for '{}'", self.username());
            }
            Err(e) => {
                log::error!("corrupted session state, logging out: {e}");
                self.logout().await;
            }
        }
    }

    /// Unconditional: clears memory and storage and navigates to the root
    /// route. No failure path; storage errors are ignored.
    pub async fn logout(&self) {
        *self.user.borrow_mut() = None;
        self.is_authenticated.set(false);
        *self.error.borrow_mut() = None;

        let _ = self.storage.remove(USER_KEY).await;
        let _ = self.storage.remove(AUTH_KEY).await;

        self.navigator.to_root();
    }

    /// Shallow-merge `patch` into the current user and re-persist.
    /// Silent no-op when nobody is logged in.
    pub async fn update_local(&self, patch: &UserUpdate) {
        let json = {
            let mut user_ref = self.user.borrow_mut();
            let Some(user) = user_ref.as_mut() else {
                return;
            };
            patch.apply_to(user);
            serde_json::to_string(user).ok()
        };

        if let Some(json) = json {
            if let Err(e) = self.storage.set(USER_KEY, &json).await {
                log::warn!("failed to re-persist user record: {e}");
            }
        }
    }

    /// Push a profile update to the backend and adopt the returned record.
    pub async fn update_profile(&self, patch: &UserUpdate) -> Result<User> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        let Some(user) = self.current_user() else {
            *self.error.borrow_mut() = Some(StoreError::NotLoggedIn.to_string());
            return Err(StoreError::NotLoggedIn);
        };

        match self.gateway.update_user(user.item_id, patch).await {
            Ok(updated) => {
                self.adopt(updated.clone()).await;
                Ok(updated)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Username availability check for the signup form.
    pub async fn fetch_usernames(&self) -> Result<Vec<String>> {
        self.gateway.get_usernames().await
    }
}
