//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth gateway populates the store, route guards read it to gate
//! rendering, and resource views read the token and role to authenticate
//! requests and hide actions. The store is provided through Leptos context,
//! never a global, so every test builds its own instance.
//!
//! INVARIANTS
//! ==========
//! - A session is authenticated iff its token is present and non-empty.
//! - All four fields change in one signal write: readers never observe a
//!   token without the matching role and identity.
//! - Every mutation writes through to durable storage; a missing token key
//!   means logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::util::storage::KeyValueStore;

/// Storage keys, all under the `gestiones.` namespace.
pub mod keys {
    pub const TOKEN: &str = "gestiones.token";
    pub const ROLE: &str = "gestiones.rol";
    pub const USERNAME: &str = "gestiones.username";
    pub const USER_ID: &str = "gestiones.id";

    pub const ALL: [&str; 4] = [TOKEN, ROLE, USERNAME, USER_ID];
}

/// The two roles the backend issues. Anything else is treated as no role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Role {
    #[serde(rename = "tecnico")]
    Technician,
    #[serde(rename = "coordinador")]
    Coordinator,
}

impl Role {
    /// Wire tag used by the backend and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technician => "tecnico",
            Self::Coordinator => "coordinador",
        }
    }

    /// Exact, case-sensitive tag match.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "tecnico" => Some(Self::Technician),
            "coordinador" => Some(Self::Coordinator),
            _ => None,
        }
    }

    /// Normalize an untrusted JSON value; non-strings are unrecognized.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }

    /// Human label for badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Technician => "Técnico",
            Self::Coordinator => "Coordinador",
        }
    }
}

/// Snapshot of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.bearer().is_some()
    }

    /// The token, when it is usable as a bearer credential.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Shared, cloneable session store backed by a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    state: ArcRwSignal<Session>,
    restored: ArcRwSignal<bool>,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.state.get_untracked())
            .field("restored", &self.restored.get_untracked())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an empty, not-yet-restored store.
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            state: ArcRwSignal::new(Session::default()),
            restored: ArcRwSignal::new(false),
            storage: Arc::new(storage),
        }
    }

    /// Create a store and immediately restore it from `storage`.
    pub fn restored_from(storage: impl KeyValueStore + 'static) -> Self {
        let store = Self::new(storage);
        store.restore();
        store
    }

    /// Current session without subscribing the caller.
    pub fn get_session(&self) -> Session {
        self.state.get_untracked()
    }

    /// Current session, tracked by the surrounding reactive scope.
    pub fn session(&self) -> Session {
        self.state.get()
    }

    /// Whether durable storage has been read into this store yet. Tracked.
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    /// Replace the whole session in one write and persist every field.
    ///
    /// An empty token cannot form a session, so it clears instead.
    pub fn set_session(&self, token: &str, role: Option<Role>, user_id: &str, display_name: Option<&str>) {
        if token.is_empty() {
            self.clear_session();
            return;
        }
        let display_name = display_name.filter(|name| !name.is_empty());

        self.storage.set(keys::TOKEN, token);
        match role {
            Some(role) => self.storage.set(keys::ROLE, role.as_str()),
            None => self.storage.remove(keys::ROLE),
        }
        match display_name {
            Some(name) => self.storage.set(keys::USERNAME, name),
            None => self.storage.remove(keys::USERNAME),
        }
        self.storage.set(keys::USER_ID, user_id);

        self.state.set(Session {
            token: Some(token.to_owned()),
            role,
            user_id: Some(user_id.to_owned()),
            display_name: display_name.map(ToOwned::to_owned),
        });
        self.restored.set(true);
    }

    /// Drop every field and storage key. Safe to call repeatedly.
    pub fn clear_session(&self) {
        for key in keys::ALL {
            self.storage.remove(key);
        }
        self.state.set(Session::default());
        self.restored.set(true);
    }

    /// Load the session from durable storage.
    ///
    /// A token without a user id is a partial session: every key is removed.
    /// A stored role that is not a recognized tag is dropped.
    pub fn restore(&self) {
        let token = self.storage.get(keys::TOKEN).filter(|t| !t.is_empty());
        let user_id = self.storage.get(keys::USER_ID).filter(|id| !id.is_empty());
        let (Some(token), Some(user_id)) = (token, user_id) else {
            self.clear_session();
            return;
        };

        let stored_role = self.storage.get(keys::ROLE);
        let role = stored_role.as_deref().and_then(Role::parse);
        if stored_role.is_some() && role.is_none() {
            self.storage.remove(keys::ROLE);
        }

        self.state.set(Session {
            token: Some(token),
            role,
            user_id: Some(user_id),
            display_name: self.storage.get(keys::USERNAME).filter(|n| !n.is_empty()),
        });
        self.restored.set(true);
    }
}
