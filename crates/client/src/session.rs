//! Session credential storage
//!
//! The facade never reads ambient global state for credentials; a
//! [`SessionStore`] is injected into the remote client at construction. A 401
//! response clears the stored credential through the same handle, which is
//! the caller's signal to route to sign-in.

use std::sync::{Mutex, PoisonError};

/// Holder of the caller's bearer credential.
pub trait SessionStore: Send + Sync {
    /// Current credential, if one is present.
    fn token(&self) -> Option<String>;

    /// Store a credential.
    fn set_token(&self, token: &str);

    /// Invalidate the credential.
    fn clear(&self);
}

/// Simple process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    token: Mutex<Option<String>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    fn set_token(&self, token: &str) {
        *self.lock() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}
