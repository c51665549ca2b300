//! Session token lifecycle.

mod memory;
mod traits;

pub use memory::MemoryStorage;
pub use traits::{TokenStorage, TOKEN_KEY};

use std::sync::{Arc, PoisonError, RwLock};

/// Holds the current bearer token and mirrors it into a [`TokenStorage`].
///
/// The in-memory token is the source of truth for outgoing requests. The
/// storage only sees tokens that were explicitly persisted.
pub struct SessionStore {
    token: RwLock<Option<String>>,
    storage: Arc<dyn TokenStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.has_token())
            .field("storage", &self.storage)
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionStore {
    /// Open a session, picking up a token persisted by a previous run.
    pub async fn open(storage: Arc<dyn TokenStorage>) -> Self {
        let token = storage.load().await;
        if token.is_some() {
            log::debug!("restored persisted session token");
        }
        Self {
            token: RwLock::new(token),
            storage,
        }
    }

    /// A session with no persisted token and throwaway storage.
    pub fn in_memory() -> Self {
        Self {
            token: RwLock::new(None),
            storage: Arc::new(MemoryStorage::new()),
        }
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a token is held.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the token. Only written to storage when `persist` is set.
    pub async fn set_token(&self, token: impl Into<String>, persist: bool) {
        let token = token.into();
        if persist {
            self.storage.store(&token).await;
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the token from memory and storage.
    pub async fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.storage.remove().await;
    }

    /// Whether the storage slot currently holds a token.
    pub async fn is_persisted(&self) -> bool {
        self.storage.load().await.is_some()
    }
}
