//! In-memory token storage.

use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use super::traits::{TokenStorage, TOKEN_KEY};

/// Token storage backed by a process-local map.
///
/// Nothing survives a restart; useful for tests and for sessions that should
/// never touch disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TOKEN_KEY.to_owned(), token.into());
        storage
    }

    /// Peek at the stored token without going through the trait.
    pub fn peek(&self) -> Option<String> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.get(TOKEN_KEY).cloned()
    }
}

#[async_trait]
impl TokenStorage for MemoryStorage {
    async fn load(&self) -> Option<String> {
        self.peek()
    }

    async fn store(&self, token: &str) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.insert(TOKEN_KEY.to_owned(), token.to_owned());
    }

    async fn remove(&self) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.remove(TOKEN_KEY);
    }
}
