//! HTTP client and configuration.

mod http;

pub use http::{HttpConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, JSON_MEDIA_TYPE};

use crate::api::{AuthApi, UserApi};
use crate::error::{Error, Result};
use crate::models::Payload;
use crate::session::SessionStore;
use http::{build_client, HttpExecutor};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Use as the `body` argument of [`AdminClient::request`] for body-less calls.
pub const NO_BODY: Option<&()> = None;

/// Builder for creating AdminClient.
pub struct AdminClientBuilder {
    http_config: HttpConfig,
    session: Option<SessionStore>,
}

impl std::fmt::Debug for AdminClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClientBuilder")
            .field("http_config", &self.http_config)
            .field("session", &self.session.as_ref().map(|s| s.has_token()))
            .finish()
    }
}

impl Default for AdminClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            http_config: HttpConfig::default(),
            session: None,
        }
    }

    /// Set base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.custom_user_agent = Some(ua.into());
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Set read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.read_timeout = Some(timeout);
        self
    }

    /// Use an opened session. Defaults to an empty in-memory one.
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Build AdminClient.
    pub fn build(self) -> Result<AdminClient> {
        // Fail early on a malformed base instead of on the first request.
        self.http_config.resolve_url("/")?;
        let http_client = build_client(&self.http_config)?;

        Ok(AdminClient {
            inner: Arc::new(AdminClientInner {
                http: http_client,
                config: self.http_config,
                session: self.session.unwrap_or_default(),
            }),
        })
    }
}

/// Internal client state.
pub(crate) struct AdminClientInner {
    pub http: reqwest::Client,
    pub config: HttpConfig,
    pub session: SessionStore,
}

impl AdminClientInner {
    /// Create HTTP executor.
    pub fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(&self.http, &self.config)
    }

    /// Issue a request and triage the response.
    ///
    /// Order matters: a 401 while a token was attached expires the session
    /// before anything is decoded, 204 short-circuits to an empty payload,
    /// and only then is the body decoded and checked for an `error` field.
    pub async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Payload>
    where
        B: Serialize + ?Sized,
    {
        let token = self.session.token();
        let body = body.map(|b| serde_json::to_vec(b)).transpose()?;

        let response = self
            .executor()
            .send(method, path, body, token.as_deref())
            .await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED && token.is_some() {
            log::warn!("token rejected on {}, clearing session", path);
            self.session.clear_token().await;
            return Err(Error::SessionExpired);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(Payload::Empty);
        }

        let bytes = response.bytes().await.map_err(Error::Network)?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        Payload::from_body(body)
    }

    /// Issue a request and decode the payload.
    pub async fn request_as<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, body).await?.decode()
    }
}

/// Client for the user-administration service.
#[derive(Clone)]
pub struct AdminClient {
    pub(crate) inner: Arc<AdminClientInner>,
}

impl AdminClient {
    /// Create a new client builder.
    pub fn builder() -> AdminClientBuilder {
        AdminClientBuilder::new()
    }

    /// Get the authentication API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.inner.clone())
    }

    /// Get the user API.
    pub fn users(&self) -> UserApi {
        UserApi::new(self.inner.clone())
    }

    /// The session holding the bearer token.
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Check if a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.inner.session.has_token()
    }

    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    /// Issue a raw request against the service.
    pub async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Payload>
    where
        B: Serialize + ?Sized,
    {
        self.inner.request(method, path, body).await
    }

    /// Issue a raw request and decode the payload.
    pub async fn request_as<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.inner.request_as(method, path, body).await
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("authenticated", &self.is_authenticated())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}
