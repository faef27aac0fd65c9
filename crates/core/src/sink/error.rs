//! Sink error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Delivery failures.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The target cannot be opened (closed window, blocked pop-up, missing
    /// directory).
    #[error("document sink unavailable: {0}")]
    Unavailable(String),

    /// Writing to an opened target failed.
    #[error("failed to write document to {}: {source}", target.display())]
    Io {
        /// Where the document was going.
        target: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Create an I/O error for a target.
    #[must_use]
    pub fn io(target: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }

    /// Human-readable reason without the error prefix.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Unavailable(reason) => reason.clone(),
            Self::Io { target, source } => format!("{}: {source}", target.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display_and_reason() {
        let err = SinkError::unavailable("pop-up blocked");
        assert_eq!(err.to_string(), "document sink unavailable: pop-up blocked");
        assert_eq!(err.reason(), "pop-up blocked");
    }

    #[test]
    fn test_io_reason_names_target() {
        let err = SinkError::io(
            "/tmp/out/report.html",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.reason(), "/tmp/out/report.html: denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
