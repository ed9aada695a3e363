//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types; the
//! HTTP recognizer maps transport failures into [`RecognizerError`] before
//! they cross the adapter boundary.

use thiserror::Error;

/// Main error type used throughout the library
#[derive(Debug, Error)]
pub enum PrahariError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern registry construction errors (bad regex, unknown category)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Entity recognizer errors
    #[error("Recognizer error: {0}")]
    Recognizer(#[from] RecognizerError),

    /// Masking/span-resolution errors
    #[error("Masking error: {0}")]
    Masking(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Entity-recognizer-specific errors
///
/// Failures while invoking the external entity-recognition service. The
/// recognizer is required for complete masking, so these are surfaced to the
/// caller rather than degraded to regex-only output.
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// Failed to reach the recognition service
    #[error("Failed to connect to recognizer: {0}")]
    ConnectionFailed(String),

    /// Authentication rejected by the service
    #[error("Recognizer authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body could not be interpreted
    #[error("Invalid recognizer response: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Recognizer server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Recognizer client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timed out
    #[error("Recognizer request timeout: {0}")]
    Timeout(String),

    /// Service returned a span outside the bounds of the submitted text
    #[error("Recognizer returned invalid span: {0}")]
    InvalidSpan(String),
}
