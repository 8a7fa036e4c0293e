//! # pi_status - Local Raspberry Pi Status Server
//!
//! A small HTTP server meant to back a dashboard on a trusted local network.
//! It serves static files from a directory and exposes one JSON endpoint,
//! `/api/pi-status`, reporting host vitals: CPU temperature, load, memory,
//! root filesystem usage, uptime, hostname and local IP address.
//!
//! ## Features
//!
//! - **Per-request snapshots**: every call reads the OS sources afresh, nothing is cached
//! - **Partial degradation**: an unreadable sensor turns into a `null` field, never an error
//! - **Static dashboard**: `/` and `/index.html` serve the bundled page
//! - **Library + Binary**: embed the router or run the `pi_status` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pi_status::{start_web_server, ServerConfig, StatusCollector};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Serves on http://127.0.0.1:8788
//!     start_web_server(ServerConfig::default(), Arc::new(StatusCollector::new())).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod web;

// Re-export public API
pub use error::{Result, StatusError};
pub use metrics::{
    collector::StatusCollector,
    data::{DiskUsage, MemoryUsage, StatusSnapshot},
    sources::MetricSources,
    traits::SnapshotProvider,
};

pub use web::{create_app, start_default_server, start_web_server, ServerConfig};

/// The address the server binds to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The port the server listens on
pub const DEFAULT_PORT: u16 = 8788;

/// Directory static files are served from, the crate's own `public/`
pub const DEFAULT_BASE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Document served for `/` and `/index.html`
pub const INDEX_DOCUMENT: &str = "index.html";

/// Path prefix answered with a status snapshot
pub const STATUS_ENDPOINT: &str = "/api/pi-status";
