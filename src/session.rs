//! Explicit session context.
//!
//! The auth token lives here instead of being read back out of ambient
//! browser storage at request time.  The [`Session`] is loaded once at
//! startup, handed to the API client, and updated through messages - the
//! only localStorage traffic is the verbatim persist/clear below.

use crate::constants::TOKEN_STORAGE_KEY;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Build a session from an already-known token (used by tests and by
    /// `load_from_storage`).
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    /// Restore the persisted token, if any.
    pub fn load_from_storage() -> Self {
        let token = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
            .filter(|t| !t.is_empty());
        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Store the token verbatim, in memory and in localStorage.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
    }

    /// Drop the token, e.g. after the backend answered 401.
    pub fn clear(&mut self) {
        self.token = None;
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}
