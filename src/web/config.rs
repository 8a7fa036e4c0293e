//! Web server configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the web server.
///
/// The binary always runs with [`ServerConfig::default`]; the builder
/// methods exist so tests and embedders can serve from another directory
/// or port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind the server to
    pub host: String,
    /// Port to bind the server to
    pub port: u16,
    /// Directory static files are served from
    pub base_dir: PathBuf,
    /// Document served for `/` and `/index.html`
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: crate::DEFAULT_HOST.to_string(),
            port: crate::DEFAULT_PORT,
            base_dir: PathBuf::from(crate::DEFAULT_BASE_DIR),
            index_file: crate::INDEX_DOCUMENT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Set the host for the web server.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port for the web server.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static files directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Get the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request path the index document is served under.
    pub fn index_path(&self) -> String {
        format!("/{}", self.index_file.trim_start_matches('/'))
    }
}
