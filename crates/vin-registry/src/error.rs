//! Registry Error Types

use thiserror::Error;
use vin_profile::ProfileError;

/// Errors from the VIN registry client
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Registry answered with a non-success status
    #[error("registry returned HTTP {0}")]
    Status(u16),

    /// Payload violated a normalization precondition
    #[error(transparent)]
    Precondition(#[from] ProfileError),
}

impl RegistryError {
    /// Whether the failure was an upstream timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
