//! VIN Registry Client
//!
//! Fetches decoded VIN records from the government registry. The
//! registry answers with an ordered list of variable/value pairs which
//! downstream normalization turns into a vehicle profile.

mod client;
mod error;

pub use client::{RegistryClient, RegistryConfig};
pub use error::RegistryError;
