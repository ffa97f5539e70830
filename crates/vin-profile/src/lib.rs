//! VIN Profile Normalization
//!
//! Turns the raw variable/value pairs returned by the government VIN
//! registry into a compact, deduplicated vehicle profile.

mod decoded;
mod error;
mod profile;

pub use decoded::{lookup, DecodedField};
pub use error::ProfileError;
pub use profile::{ensure_vin, VehicleProfile};
