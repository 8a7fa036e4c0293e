//! Error handling for the pi_status crate.

/// A specialized `Result` type for pi_status operations.
pub type Result<T> = std::result::Result<T, StatusError>;

/// The main error type for pi_status.
///
/// Inside request handling these errors never reach the client: metric
/// readers turn them into a `null` field. They only surface from server
/// startup and from the pure parsing helpers.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data source could not be parsed
    #[error("Failed to parse system information: {0}")]
    ParseError(String),

    /// A required field was absent from a data source
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The platform has no way to report this value
    #[error("Metric unavailable: {0}")]
    Unavailable(String),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StatusError {
    /// Create a new parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a new missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a new unavailable-metric error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
