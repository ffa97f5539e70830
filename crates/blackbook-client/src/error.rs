//! Valuation Provider Errors

use thiserror::Error;

/// Errors from the Blackbook client
#[derive(Debug, Error)]
pub enum BlackbookError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("valuation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider rejected the configured credentials
    #[error("valuation provider rejected the configured credentials")]
    Unauthorized,

    /// Provider answered with a non-success status
    #[error("valuation provider returned HTTP {0}")]
    Status(u16),

    /// Query was accepted but reported errors
    #[error("valuation query failed: {0}")]
    Graphql(String),

    /// Response envelope carried no data section
    #[error("valuation response carried no data")]
    MissingData,

    /// No valuation exists for the requested VIN
    #[error("no valuation found for VIN {0}")]
    NotFound(String),
}

impl BlackbookError {
    /// Whether the failure was an upstream timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
