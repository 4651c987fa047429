//! Process-wide session state: who is signed in, and whether a persisted
//! session is still being recovered.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the single writer of session state. Route guards and
//! user-aware components read it through the store's accessors; every
//! mutation goes through `login`, `logout`, or the one-shot `restore`, so the
//! in-memory state and its `localStorage` mirror cannot drift apart.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::util::storage;

/// `localStorage` key holding the serialized identity between visits.
pub const SESSION_STORAGE_KEY: &str = "plantcare_session";

/// The current identity, if any, plus the restore flag.
///
/// `restoring` starts `true` and is cleared exactly once, after persisted
/// storage has been checked. Consumers gating on authentication must treat
/// the restoring window as "unknown", not "unauthenticated".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<Identity>,
    restoring: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            restoring: true,
        }
    }
}

impl SessionState {
    /// The authenticated identity, or `None` when signed out or unresolved.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// True until the one-shot storage check has completed.
    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub(crate) fn login(&mut self, identity: Identity) {
        self.identity = Some(identity);
        self.restoring = false;
    }

    pub(crate) fn logout(&mut self) {
        self.identity = None;
        self.restoring = false;
    }

    /// Install the outcome of the storage check. A login or logout that
    /// resolved the state while the check was pending wins: once `restoring`
    /// is cleared the result is discarded.
    pub(crate) fn finish_restore(&mut self, identity: Option<Identity>) {
        if !self.restoring {
            return;
        }
        self.identity = identity;
        self.restoring = false;
    }
}

/// Shared handle to the session state, provided via Leptos context.
///
/// The signal is private: views read through the accessors and mutate only
/// through the named operations, and every mutation is reactive so gated
/// components re-evaluate instead of caching a stale reading.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive read of the whole session state.
    pub fn read<R>(self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    /// The current identity (reactive).
    pub fn identity(self) -> Option<Identity> {
        self.state.with(|state| state.identity().cloned())
    }

    /// True until the persisted-session check has completed (reactive).
    pub fn is_restoring(self) -> bool {
        self.state.with(SessionState::is_restoring)
    }

    /// One-shot recovery of a persisted session from `localStorage`. Calls
    /// after the first are no-ops, as is a call racing a login that already
    /// resolved the state.
    pub fn restore(self) {
        if !self.state.with_untracked(SessionState::is_restoring) {
            return;
        }
        let saved = storage::load_json::<Identity>(SESSION_STORAGE_KEY);
        self.state.update(|state| state.finish_restore(saved));
    }

    /// Install the identity returned by a successful sign-in and mirror it
    /// to durable storage. A failed write degrades to a tab-scoped session;
    /// it is logged in `storage`, never surfaced to the user.
    pub fn login(self, identity: Identity) {
        storage::save_json(SESSION_STORAGE_KEY, &identity);
        self.state.update(|state| state.login(identity));
    }

    /// Clear the session in memory and in durable storage. Idempotent.
    pub fn logout(self) {
        storage::clear_key(SESSION_STORAGE_KEY);
        self.state.update(SessionState::logout);
    }
}
