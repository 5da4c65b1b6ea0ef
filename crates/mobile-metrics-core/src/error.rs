//! Shared error types across mobile-metrics crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed body (not JSON, or wrong JSON shape).
    BadRequest,
    /// Body larger than the configured maximum.
    PayloadTooLarge,
    /// Well-formed payload that failed validation.
    InvalidMetric,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error (e.g. downstream sink failure).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs, counters and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::InvalidMetric => "INVALID_METRIC",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Which field of a security metric entry was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityField {
    Id,
    Name,
    Passed,
}

impl SecurityField {
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityField::Id => "id",
            SecurityField::Name => "name",
            SecurityField::Passed => "passed",
        }
    }
}

impl std::fmt::Display for SecurityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure. `Display` renders the client-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing clientId in payload")]
    MissingClientId,
    #[error("clientId exceeded maximum length of {max}")]
    ClientIdTooLong { max: usize },
    #[error("missing type in payload")]
    MissingEventType,
    #[error("type exceeded maximum length of {max}")]
    EventTypeTooLong { max: usize },
    #[error("timestamp must be a valid number")]
    InvalidTimestamp,
    #[error("missing metrics data in payload")]
    MissingData,
    #[error("missing data.app in init-type payload")]
    MissingApp,
    #[error("missing data.device in init-type payload")]
    MissingDevice,
    #[error("missing data.security in security-type payload")]
    MissingSecurity,
    #[error("data.security cannot be empty")]
    SecurityEmpty,
    #[error("maximum length of data.security {max}")]
    SecurityTooLong { max: usize },
    #[error("invalid element in data.security at position {index}, {field} must be included")]
    SecurityElementIncomplete { index: usize, field: SecurityField },
    #[error("payload type unknown")]
    UnknownType,
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and intake.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map internal error to a stable client-facing code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            MetricsError::BadRequest(_) => ErrorCode::BadRequest,
            MetricsError::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            MetricsError::Invalid(_) => ErrorCode::InvalidMetric,
            MetricsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            MetricsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
