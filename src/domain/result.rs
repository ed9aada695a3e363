//! Result type alias for the domain

use super::errors::PrahariError;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, PrahariError>;
