//! Auth session store
//!
//! Holds the bearer token and admin profile, persisted to local storage so
//! a reload keeps the session. The storage keys are part of the app's
//! contract: the token under `authToken`, the profile JSON under `userData`.

use leptos::*;

use crate::api::client;
use crate::model::AdminProfile;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_DATA_KEY: &str = "userData";

/// Auth session provided to the whole component tree.
#[derive(Clone)]
pub struct AuthStore {
    pub token: RwSignal<Option<String>>,
    pub profile: RwSignal<Option<AdminProfile>>,
    /// True while a login request is in flight.
    pub loading: RwSignal<bool>,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the persisted bearer token, if any. Also used by the API client to
/// attach the Authorization header.
pub fn stored_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

fn stored_profile() -> Option<AdminProfile> {
    local_storage()
        .and_then(|storage| storage.get_item(USER_DATA_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
}

fn persist_session(token: &str, profile: &AdminProfile) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(profile) {
            let _ = storage.set_item(USER_DATA_KEY, &json);
        }
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
        let _ = storage.remove_item(USER_DATA_KEY);
    }
}

/// Provide the auth store, rehydrated from local storage.
pub fn provide_auth_store() {
    let store = AuthStore {
        token: create_rw_signal(stored_token()),
        profile: create_rw_signal(stored_profile()),
        loading: create_rw_signal(false),
    };
    provide_context(store);
}

impl AuthStore {
    pub fn is_logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn admin_id(&self) -> Option<i64> {
        self.profile.with(|profile| profile.as_ref().map(|p| p.id))
    }

    /// Log in against the backend; persists the session on success and
    /// clears any stale one on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        self.loading.set(true);
        let result = client::login(email, password).await;
        self.loading.set(false);

        match result {
            Ok(response) => {
                persist_session(&response.token, &response.token_payload);
                self.token.set(Some(response.token));
                self.profile.set(Some(response.token_payload));
                Ok(())
            }
            Err(error) => {
                clear_session();
                self.token.set(None);
                self.profile.set(None);
                Err(error)
            }
        }
    }

    pub fn logout(&self) {
        clear_session();
        self.token.set(None);
        self.profile.set(None);
    }
}
