//! Client library for the LAN user-administration service.
//!
//! [`AdminClient`] talks to the REST backend and owns the session token,
//! [`Console`] turns operator actions into calls and keeps track of the
//! [`CurrentUser`].

pub mod api;
pub mod client;
pub mod console;
pub mod error;
pub mod models;
pub mod session;

// Re-export main types
pub use client::{AdminClient, AdminClientBuilder, HttpConfig, NO_BODY};
pub use console::{Console, Modal, Ui};
pub use error::{Error, Result};
pub use session::{MemoryStorage, SessionStore, TokenStorage};

// Re-export commonly used models
pub use models::{
    AuthResult, Credentials, CurrentUser, NewUser, PasswordChange, Payload, ProfileUpdate,
    ServerUser, StatusUpdate, UserId,
};

// Re-export API types
pub use api::{AuthApi, UserApi};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = AdminClient::builder().build();
        assert!(client.is_ok());

        let client = client.unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.base_url(), client::DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_client_with_session() {
        let session = SessionStore::open(std::sync::Arc::new(MemoryStorage::with_token("t"))).await;
        let client = AdminClient::builder()
            .base_url("http://example.test/rest")
            .session(session)
            .build()
            .unwrap();

        assert!(client.is_authenticated());
        assert_eq!(client.session().token().as_deref(), Some("t"));
    }
}
