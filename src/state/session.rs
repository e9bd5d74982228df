//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` persists the bearer token and role under the `authToken` and
//! `role` keys. It is written by the auth forms and logout, and read by the
//! HTTP client on every request. `SessionState` is the reactive mirror that
//! route guards and pages watch.
//!
//! DESIGN
//! ======
//! Storage is injected through `SessionStorage`: browser `localStorage` in
//! the `csr` build, an in-memory map in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "authToken";
pub const ROLE_KEY: &str = "role";

// =============================================================================
// ROLE
// =============================================================================

/// User role, used only for display.
///
/// Serialized as the exact wire string; unrecognized values pass through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Manager,
    Qa,
    Developer,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manager => "manager",
            Self::Qa => "QA",
            Self::Developer => "developer",
            Self::Other(raw) => raw,
        }
    }

    /// Role with its first letter upper-cased, e.g. `Manager`.
    pub fn display_label(&self) -> String {
        capitalize_first(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "manager" => Self::Manager,
            "QA" => Self::Qa,
            "developer" => Self::Developer,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Origin-scoped key/value persistence.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-process storage; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Browser `localStorage`. Writes are best-effort; a missing or locked-down
/// storage reads as empty.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// A persisted session. Only exists while a token is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Option<Role>,
}

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `token` (stripped of any `Bearer ` scheme) and `role`.
    /// A missing role removes any previously stored one.
    pub fn set(&self, token: &str, role: Option<&Role>) {
        self.storage.set_item(TOKEN_KEY, normalize_token(token));
        match role {
            Some(role) => self.storage.set_item(ROLE_KEY, role.as_str()),
            None => self.storage.remove_item(ROLE_KEY),
        }
    }

    /// Current session, or `None` when no token is stored.
    pub fn get(&self) -> Option<Session> {
        let token = self.token()?;
        let role = self
            .storage
            .get_item(ROLE_KEY)
            .filter(|raw| !raw.trim().is_empty())
            .map(Role::from);
        Some(Session { token, role })
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|raw| !raw.trim().is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(ROLE_KEY);
    }
}

/// Strip an optional `Bearer` scheme from an `Authorization` header value.
pub fn normalize_token(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim_start(),
        _ => trimmed,
    }
}

// =============================================================================
// REACTIVE STATE
// =============================================================================

/// Session snapshot provided via context.
///
/// `loading` stays true until the store has been read once; nothing that
/// depends on the session may run before that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().and_then(|s| s.role.as_ref())
    }

    pub fn role_label(&self) -> String {
        self.role().map(Role::display_label).unwrap_or_default()
    }
}
