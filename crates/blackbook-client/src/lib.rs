//! Blackbook Valuation Client
//!
//! GraphQL client for the Blackbook used-vehicle valuation provider:
//! credential verification, VIN valuation with odometer adjustment, and
//! per-province pricing cards.

mod client;
mod error;
mod types;

pub use client::{BlackbookClient, BlackbookConfig};
pub use error::BlackbookError;
pub use types::{PricingCard, VehicleValuation};
