//! errboard configuration
//!
//! Configuration lives in `$XDG_CONFIG_HOME/errboard/config.toml` and is
//! optional. The API base URL can also come from `ERRBOARD_API_URL`, which is
//! read once at process start and wins over the file.
//!
//! ```toml
//! [api]
//! url = "http://localhost:3001"
//! timeout_secs = 10
//!
//! [log]
//! level = "info"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "ERRBOARD_API_URL";

/// Fixed resource path of the grouped error listing
pub const GROUPS_PATH: &str = "/getErrorGroups";

const CONFIG_DIR: &str = "errboard";
const CONFIG_FILE: &str = "config.toml";

/// Aggregation service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the aggregation service
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Complete panel configuration, passed explicitly into the panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl PanelConfig {
    /// Config with the given base URL and defaults elsewhere
    pub fn with_api_url(url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.url = url.into();
        config
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from the process environment.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_url = std::env::var(API_URL_ENV).ok();
        match path {
            Some(path) => Self::load_from(Some(path), env_url),
            None => {
                let default = Self::default_path().filter(|p| p.exists());
                Self::load_from(default.as_deref(), env_url)
            }
        }
    }

    /// Load from an optional file, then apply the environment URL override
    pub fn load_from(path: Option<&Path>, env_url: Option<String>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            config.api.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid("api.url is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api.url must start with http:// or https://, got {}",
                url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of the grouped error listing
    pub fn groups_url(&self) -> String {
        format!("{}{}", self.api.url.trim().trim_end_matches('/'), GROUPS_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}
