//! Configuration management for the lanadmin CLI.

use anyhow::{Context, Result};
use async_trait::async_trait;
use lanadmin::{client::DEFAULT_BASE_URL, AdminClient, SessionStore, TokenStorage};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default config file name, looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "lanadmin.toml";

/// CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the service lives.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persisted session, present only after `auth login --remember`.
    pub session: Option<SessionConfig>,
}

/// Server connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// REST base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Read timeout in seconds.
    pub read_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: None,
            read_timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

/// Persisted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bearer token.
    pub token: String,
    /// Base URL the token was issued by.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl SessionConfig {
    /// Whether this session belongs to the server at `base_url`.
    pub fn issued_by(&self, base_url: &str) -> bool {
        self.base_url
            .as_deref()
            .is_some_and(|own| own.trim_end_matches('/') == base_url.trim_end_matches('/'))
    }
}

/// Get the default configuration file path.
pub fn default_config_path() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from file.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Save configuration to file.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, content).context("Failed to write config file")?;

    Ok(())
}

/// Token slot kept in the `[session]` table of the config file.
///
/// The slot is scoped to one server: a token stored for another base URL is
/// never loaded.
#[derive(Debug, Clone)]
pub struct ConfigTokenStorage {
    path: PathBuf,
    base_url: String,
}

impl ConfigTokenStorage {
    pub fn new(path: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            base_url: base_url.into(),
        }
    }

    fn update(&self, session: Option<SessionConfig>) -> Result<()> {
        let mut config = load_config(&self.path)?;
        config.session = session;
        save_config(&self.path, &config)
    }
}

#[async_trait]
impl TokenStorage for ConfigTokenStorage {
    async fn load(&self) -> Option<String> {
        match load_config(&self.path) {
            Ok(config) => match config.session {
                Some(session) if session.issued_by(&self.base_url) => Some(session.token),
                Some(_) => {
                    tracing::debug!(
                        base_url = %self.base_url,
                        "persisted session belongs to another server"
                    );
                    None
                }
                None => None,
            },
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "cannot read session: {:#}", e);
                None
            }
        }
    }

    async fn store(&self, token: &str) {
        let session = SessionConfig {
            token: token.to_owned(),
            base_url: Some(self.base_url.clone()),
        };
        if let Err(e) = self.update(Some(session)) {
            tracing::warn!(path = %self.path.display(), "cannot persist session: {:#}", e);
        }
    }

    async fn remove(&self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = self.update(None) {
            tracing::warn!(path = %self.path.display(), "cannot drop session: {:#}", e);
        }
    }
}

/// Build a client from the configuration, restoring any persisted session.
pub async fn build_client(path: &Path, url_override: Option<&str>) -> Result<AdminClient> {
    let config = load_config(path)?;

    let base_url = url_override.unwrap_or(&config.server.base_url);

    let storage = Arc::new(ConfigTokenStorage::new(path, base_url));
    let session = SessionStore::open(storage).await;

    let mut builder = AdminClient::builder().base_url(base_url).session(session);

    if let Some(secs) = config.server.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.server.read_timeout_secs {
        builder = builder.read_timeout(Duration::from_secs(secs));
    }

    builder.build().context("Failed to build lanadmin client")
}
