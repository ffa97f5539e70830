//! Valuation Record Types

use serde::{Deserialize, Serialize};

/// Odometer-adjusted valuation for one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleValuation {
    pub vin: String,
    /// Odometer reading the values were adjusted for
    pub odometer: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Adjusted wholesale value, clean condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_whole_clean: Option<f64>,
    /// Adjusted retail value, clean condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_retail_clean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
}

/// One regional pricing card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCard {
    pub vin: String,
    /// Mileage the card was priced at, in kilometers
    pub mileage: i64,
    pub province: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_whole_clean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
}
