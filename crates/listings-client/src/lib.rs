//! Market Listings Client
//!
//! Searches the market-listings source for comparable vehicles by year,
//! make, and model, optionally narrowed to a province.

mod client;
mod error;

pub use client::{ListingsClient, ListingsConfig, SearchQuery};
pub use error::ListingsError;
