//! HTTP client configuration and request execution.

use crate::error::{Error, Result};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, Method, Response,
};
use std::time::Duration;
use url::Url;

/// Default REST base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/rest";

/// Media type used for request and response bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Default user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("lanadmin/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// Connection timeout. `None` leaves the transport default.
    pub connect_timeout: Option<Duration>,
    /// Read timeout. `None` leaves the transport default.
    pub read_timeout: Option<Duration>,
    /// Custom user agent.
    pub custom_user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            connect_timeout: None,
            read_timeout: None,
            custom_user_agent: None,
        }
    }
}

impl HttpConfig {
    pub fn user_agent(&self) -> &str {
        self.custom_user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Resolve an API path against the base URL.
    ///
    /// The path is appended to the base as-is, so any prefix in the base
    /// (`http://host/rest`) is kept.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let url = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };
        Url::parse(&url).map_err(Error::Url)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().gzip(true);
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = config.read_timeout {
        builder = builder.read_timeout(timeout);
    }
    builder.build().map_err(Error::Network)
}

/// HTTP request executor.
pub struct HttpExecutor<'a> {
    client: &'a Client,
    config: &'a HttpConfig,
}

impl<'a> HttpExecutor<'a> {
    /// Create a new executor.
    pub fn new(client: &'a Client, config: &'a HttpConfig) -> Self {
        Self { client, config }
    }

    /// Send one request.
    ///
    /// Adds the bearer token when given, a JSON body with its content type
    /// when given, and always asks for a JSON response.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        token: Option<&str>,
    ) -> Result<Response> {
        let url = self.config.resolve_url(path)?;
        log::debug!(
            "{} {} (token: {}, body: {})",
            method,
            url,
            token.is_some(),
            body.is_some()
        );

        let mut request = self
            .client
            .request(method, url)
            .header(USER_AGENT, self.config.user_agent());

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(body);
        }
        request = request.header(ACCEPT, JSON_MEDIA_TYPE);

        let response = request.send().await.map_err(Error::Network)?;
        log::debug!("-> {}", response.status());
        Ok(response)
    }
}
