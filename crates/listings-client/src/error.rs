//! Listings Source Errors

use thiserror::Error;

/// Errors from the market-listings client
#[derive(Debug, Error)]
pub enum ListingsError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("listings request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Listings source answered with a non-success status
    #[error("listings source returned HTTP {0}")]
    Status(u16),
}

impl ListingsError {
    /// Whether the failure was an upstream timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
