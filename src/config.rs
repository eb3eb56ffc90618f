use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Transport settings for [`crate::http::HttpClient`].
///
/// The crate owns no config file; embedding applications can keep this as a
/// section of their own TOML and hand it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            user_agent: concat!("discord-cdn/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: HttpConfig = toml::from_str(data).context("invalid HTTP config")?;
        Ok(cfg)
    }
}

/// Load configuration from `path`, or defaults if the file does not exist.
pub fn load_from_path(path: &Path) -> Result<HttpConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(HttpConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    HttpConfig::from_toml_str(&data)
}
