//! Token storage trait definitions.

use async_trait::async_trait;

/// Key the token is kept under in key-value backends.
pub const TOKEN_KEY: &str = "token";

/// A persistent slot for a single bearer token.
///
/// Storage is assumed not to fail in normal operation. Implementations that
/// can fail (files, keychains) should log and carry on rather than surface
/// an error to the session.
#[async_trait]
pub trait TokenStorage: Send + Sync + std::fmt::Debug {
    /// Read the persisted token, if any.
    async fn load(&self) -> Option<String>;

    /// Persist the token, replacing any previous value.
    async fn store(&self, token: &str);

    /// Remove the persisted token.
    async fn remove(&self);
}
