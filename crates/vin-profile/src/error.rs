//! Profile Precondition Errors

use thiserror::Error;

/// Precondition failures on the normalization boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// VIN is not exactly 17 characters
    #[error("VIN must be 17 characters, got {length}")]
    InvalidVin { length: usize },

    /// Registry payload carried no decoded results
    #[error("decoded VIN record is missing its results")]
    MissingResults,
}
