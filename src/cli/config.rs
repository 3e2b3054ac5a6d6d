//! Configuration file structure
//!
//! A JSON file where every field is optional. A missing file means all
//! defaults. `PORT` in the environment replaces `server.port`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::{LoggingConfig, LOG_FORMATS};
use crate::store::{StoreConfig, DEFAULT_BUSY_TIMEOUT_MS};

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default "./db/election.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// SQLite busy timeout in milliseconds (default 5000)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./db/election.db")
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
            server: HttpServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, then apply the environment override
    pub fn load(path: &Path) -> CliResult<Self> {
        let config = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config: {}",
                    e
                )))
            }
        };

        let config = config.with_port_override(std::env::var(PORT_ENV).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Replace the port when `value` is set
    pub fn with_port_override(mut self, value: Option<String>) -> CliResult<Self> {
        if let Some(raw) = value {
            self.server.port = raw.trim().parse().map_err(|e| {
                CliError::config_error(format!("Invalid {} value '{}': {}", PORT_ENV, raw, e))
            })?;
        }
        Ok(self)
    }

    /// Reject values that cannot work
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid logging.format: '{}'. Must be one of {:?}.",
                self.logging.format, LOG_FORMATS
            )));
        }

        Ok(())
    }

    /// Store settings derived from this configuration
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            path: self.database_path.clone(),
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}
