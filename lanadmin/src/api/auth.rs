//! Authentication API.

use std::sync::Arc;

use reqwest::Method;

use crate::{
    client::AdminClientInner,
    error::Result,
    models::{AuthResult, Credentials},
};

/// API for signing in.
pub struct AuthApi {
    client: Arc<AdminClientInner>,
}

impl AuthApi {
    pub(crate) fn new(client: Arc<AdminClientInner>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// The token is returned, not stored; the caller decides whether it
    /// outlives the process.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResult> {
        self.client
            .request_as(Method::POST, "/authenticate", Some(credentials))
            .await
    }
}
