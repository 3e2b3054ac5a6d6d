//! Listener and CORS settings, read from the `server` section of the config
//! file. The port defaults to 3001 and may be replaced by `PORT`.

use std::net::{AddrParseError, SocketAddr};

use serde::{Deserialize, Serialize};

/// Port the API listens on when neither the file nor `PORT` sets one
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Interface address; all interfaces unless set
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to call the API. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Default listener on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as configured, for logs
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed listen address. Host names are not resolved.
    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.socket_addr().parse()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }
}
