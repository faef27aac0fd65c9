//! Report error types.

use hireme_shared::AppError;
use thiserror::Error;

use crate::sink::SinkError;

/// A rejected configuration override. Never fatal: the offending key is
/// logged and the default is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Overrides were not a JSON object.
    #[error("overrides must be an object")]
    NotAnObject,

    /// Key is not part of the configuration surface.
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Key has the wrong JSON type.
    #[error("configuration key '{key}' must be a {expected}")]
    InvalidType {
        /// Offending key.
        key: String,
        /// Expected JSON type.
        expected: &'static str,
    },

    /// Key has an unusable value.
    #[error("configuration key '{key}' has invalid value '{value}': {reason}")]
    InvalidValue {
        /// Offending key.
        key: String,
        /// Rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid value error.
    #[must_use]
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Failure inside a single section generator. The assembler replaces the
/// section with an "unavailable" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// A timestamp field could not be parsed.
    #[error("field '{field}' is not a valid timestamp: '{value}'")]
    InvalidTimestamp {
        /// Record field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },

    /// A sum of amounts does not fit in a decimal.
    #[error("amount overflow while computing {field}")]
    AmountOverflow {
        /// Figure being computed.
        field: &'static str,
    },
}

/// Errors surfaced to the caller of a report operation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The document could not be composed.
    #[error("failed to render report{}: {reason}", record_suffix(.record_id))]
    RenderFailure {
        /// Record being rendered when the failure happened.
        record_id: Option<i64>,
        /// Failure description.
        reason: String,
    },

    /// The document was composed but the sink could not take it.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[allow(clippy::ref_option)]
fn record_suffix(record_id: &Option<i64>) -> String {
    record_id.map_or_else(String::new, |id| format!(" for quote {id}"))
}

impl ReportError {
    /// Create a render failure error.
    #[must_use]
    pub fn render_failure(record_id: Option<i64>, reason: impl Into<String>) -> Self {
        Self::RenderFailure {
            record_id,
            reason: reason.into(),
        }
    }

    /// Returns true when the sink refused the document.
    #[must_use]
    pub const fn is_sink_unavailable(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        let message = err.to_string();
        match err {
            ReportError::RenderFailure { .. } => Self::Render(message),
            ReportError::Sink(sink) => Self::SinkUnavailable(sink.reason()),
        }
    }
}
