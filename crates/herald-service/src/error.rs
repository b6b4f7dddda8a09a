//! Common error type definitions.

use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Store and selection implementations wrap their native failures (database,
/// network, deserialization) in this type when building an [`Error`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors that can occur in herald-service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input validation failed (malformed query or command).
    InvalidInput,
    /// No matching resource exists.
    NotFound,
    /// The underlying state is ambiguous or conflicting.
    Conflict,
    /// Store or provider temporarily unavailable.
    ServiceUnavailable,
    /// Timeout occurred.
    Timeout,
    /// Internal service error.
    InternalError,
    /// External dependency error.
    ExternalError,
    /// Serialization/deserialization error.
    Serialization,
    /// Unknown error occurred.
    Unknown,
}

/// A structured error type for herald-service operations.
#[derive(Debug, Error)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new invalid input error.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Creates a new not found error.
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Creates a new conflict error.
    pub fn conflict() -> Self {
        Self::new(ErrorKind::Conflict)
    }

    /// Creates a new service unavailable error.
    pub fn service_unavailable() -> Self {
        Self::new(ErrorKind::ServiceUnavailable)
    }

    /// Creates a new timeout error.
    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Creates a new internal error.
    pub fn internal_error() -> Self {
        Self::new(ErrorKind::InternalError)
    }

    /// Creates a new external error.
    pub fn external_error() -> Self {
        Self::new(ErrorKind::ExternalError)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Creates a new unknown error.
    pub fn unknown() -> Self {
        Self::new(ErrorKind::Unknown)
    }

    /// Returns true if this error only reports that no winner exists.
    ///
    /// A selection provider failing with one of these kinds is folded into
    /// an absent result instead of aborting the resolution.
    pub fn is_absence(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound | ErrorKind::Conflict)
    }

    /// Returns true if this error is potentially retryable by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ServiceUnavailable | ErrorKind::Timeout
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization()
            .with_message("failed to decode snapshot")
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_kinds() {
        assert!(Error::not_found().is_absence());
        assert!(Error::conflict().is_absence());
        assert!(!Error::invalid_input().is_absence());
        assert!(!Error::service_unavailable().is_absence());
        assert!(!Error::internal_error().is_absence());
    }

    #[test]
    fn display_includes_message() {
        let error = Error::invalid_input().with_message("blank provider id");
        assert_eq!(error.to_string(), "InvalidInput: blank provider id");
        assert_eq!(Error::timeout().to_string(), "Timeout");
    }

    #[test]
    fn retryable_kinds() {
        assert!(Error::timeout().is_retryable());
        assert!(Error::service_unavailable().is_retryable());
        assert!(!Error::invalid_input().is_retryable());
    }
}
