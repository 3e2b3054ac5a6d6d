//! Observability for the election API
//!
//! - Logging through `tracing`, installed once by [`init_logging`]
//! - Pretty or JSON output selected by configuration
//! - `RUST_LOG` overrides the configured level
//! - Lifecycle milestones logged as typed [`Event`]s
//!
//! HTTP request spans come from `tower_http::trace::TraceLayer`, installed by
//! the server.

mod events;

pub use events::Event;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Accepted values for [`LoggingConfig::format`]
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "election=info,tower_http=info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

/// Observability errors
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("global subscriber already installed")]
    AlreadyInstalled,
}

/// Installs the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| ObservabilityError::InvalidFilter {
            directive: config.level.clone(),
            reason: e.to_string(),
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.is_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|_| ObservabilityError::AlreadyInstalled)
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_detail(event, "");
}

/// Log a lifecycle event with a free-form detail
pub fn log_event_with_detail(event: Event, detail: &str) {
    if event.is_failure() {
        tracing::error!(event = event.as_str(), detail, "lifecycle");
    } else {
        tracing::info!(event = event.as_str(), detail, "lifecycle");
    }
}
