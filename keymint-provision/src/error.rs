//! Error types for provisioning operations.

use keymint_client::ApiError;
use thiserror::Error;

/// Result type for provisioning operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors surfaced to the lifecycle dispatcher.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The license server call failed.
    #[error("license server error: {0}")]
    Api(#[from] ApiError),

    /// The password cannot be empty.
    #[error("the password cannot be empty")]
    EmptyPassword,

    /// A numeric or enumerated option carried an unusable value.
    #[error("invalid value {value:?} for option {option}")]
    InvalidOption {
        /// Short id of the option.
        option: &'static str,
        /// The rejected value.
        value: String,
    },
}
