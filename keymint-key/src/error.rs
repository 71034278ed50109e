//! Error types for license key validation.

use thiserror::Error;

/// Errors raised when validating an externally supplied key string.
///
/// Derivation itself is total and never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Wrong overall length.
    #[error("license key must be 32 characters, got {0}")]
    InvalidLength(usize),

    /// Wrong hyphen grouping.
    #[error("license key must have five hyphenated groups of 5-5-4-7-7 characters")]
    InvalidGrouping,

    /// A character outside uppercase hexadecimal.
    #[error("license key contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Result type for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
