//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input records could not be read or decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Application configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A report could not be composed.
    #[error("Render failure: {0}")]
    Render(String),

    /// The display/print target refused the document.
    #[error("Document sink unavailable: {0}")]
    SinkUnavailable(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => 65,
            Self::Configuration(_) => 78,
            Self::Render(_) => 70,
            Self::SinkUnavailable(_) => 69,
            Self::Internal(_) => 1,
        }
    }

    /// Returns the stable error code shown to users.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Render(_) => "RENDER_FAILURE",
            Self::SinkUnavailable(_) => "SINK_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
