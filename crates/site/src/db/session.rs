//! The signed-in visitor, kept in the ephemeral scope.
//!
//! There is exactly one session slot. Signing in again overwrites it.

use crate::models::UserSession;
use crate::models::session::pages;
use crate::storage::{KeyValueStore, StoreAdapter, keys};

/// Outcome of checking for a session before showing a members-only page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionGuard {
    /// A visitor is signed in.
    Active(UserSession),
    /// Nobody is signed in; send the visitor here.
    Redirect(&'static str),
}

/// Access to the `currentUser` slot.
pub struct SessionStore<'a> {
    adapter: StoreAdapter<'a>,
}

impl<'a> SessionStore<'a> {
    /// Open the session slot in the ephemeral store.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            adapter: StoreAdapter::new(store),
        }
    }

    /// The signed-in visitor, if any.
    #[must_use]
    pub fn current(&self) -> Option<UserSession> {
        self.adapter.read_one(keys::CURRENT_USER)
    }

    /// Store `session`, replacing any previous one.
    ///
    /// Returns `false` if the write was dropped.
    pub fn sign_in(&self, session: &UserSession) -> bool {
        let stored = self.adapter.write_one(keys::CURRENT_USER, session);
        if stored {
            tracing::info!(username = %session.username, "session started");
        }
        stored
    }

    /// Clear the session. Returns `false` if the removal failed.
    pub fn sign_out(&self) -> bool {
        let cleared = self.adapter.remove(keys::CURRENT_USER);
        if cleared {
            tracing::info!("session ended");
        }
        cleared
    }

    /// Gate a members-only page.
    #[must_use]
    pub fn guard(&self) -> SessionGuard {
        self.current()
            .map_or(SessionGuard::Redirect(pages::REGISTER), SessionGuard::Active)
    }
}
