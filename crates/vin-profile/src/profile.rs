//! Vehicle Profile Assembly

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoded::{lookup, DecodedField};
use crate::error::ProfileError;

/// Registry variable names recognized by the normalizer.
///
/// Adding a provider synonym means adding a constant here and wiring it
/// into [`VehicleProfile::normalize`]; the set below is exhaustive for
/// the current registry.
mod variables {
    pub const MAKE: &str = "Make";
    pub const MODEL: &str = "Model";
    pub const MODEL_YEAR: &str = "Model Year";
    pub const SERIES: &str = "Series";
    pub const SERIES2: &str = "Series2";
    pub const TRIM: &str = "Trim";
    pub const TRIM2: &str = "Trim2";
    pub const BODY_CLASS: &str = "Body Class";
    pub const ENGINE_MODEL: &str = "Engine Model";
    pub const ENGINE_CONFIGURATION: &str = "Engine Configuration";
    pub const ENGINE_CYLINDERS: &str = "Engine Number of Cylinders";
    pub const DISPLACEMENT_L: &str = "Displacement (L)";
    pub const TRANSMISSION_STYLE: &str = "Transmission Style";
    pub const TRANSMISSION_SPEEDS: &str = "Transmission Speeds";
    pub const DRIVE_TYPE: &str = "Drive Type";
    pub const FUEL_TYPE_PRIMARY: &str = "Fuel Type - Primary";
    pub const MANUFACTURER_NAME: &str = "Manufacturer Name";
    pub const PLANT_CITY: &str = "Plant City";
    pub const PLANT_COUNTRY: &str = "Plant Country";
    pub const VEHICLE_TYPE: &str = "Vehicle Type";
    pub const DOORS: &str = "Doors";
    pub const WINDOWS: &str = "Windows";
    pub const SEAT_ROWS: &str = "Seat Rows";
}

/// Normalized vehicle profile.
///
/// Every field except `vin` is optional; fields without a usable source
/// value are omitted from serialized output rather than carried as
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// 17-character vehicle identification number
    pub vin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Composed trim description (series + trim designations, deduplicated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    /// Bare trim code as reported by the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinders: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displacement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission_speeds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_rows: Option<String>,
}

/// Check the 17-character VIN precondition.
///
/// Callers reject a malformed VIN here before any registry round trip;
/// [`VehicleProfile::normalize`] re-checks it as its own precondition.
pub fn ensure_vin(vin: &str) -> Result<(), ProfileError> {
    let length = vin.chars().count();
    if length != 17 {
        return Err(ProfileError::InvalidVin { length });
    }
    Ok(())
}

impl VehicleProfile {
    /// Normalize a raw decoded-field sequence into a profile.
    ///
    /// The VIN must be exactly 17 characters; the field sequence is the
    /// registry's `Results` list for that VIN.
    pub fn normalize(vin: &str, fields: &[DecodedField]) -> Result<Self, ProfileError> {
        ensure_vin(vin)?;

        let series = lookup(fields, variables::SERIES);
        let series2 = lookup(fields, variables::SERIES2);
        let trim = lookup(fields, variables::TRIM);
        let trim2 = lookup(fields, variables::TRIM2);
        let full_trim = compose_trim(
            series.as_deref(),
            series2.as_deref(),
            trim.as_deref(),
            trim2.as_deref(),
        );

        let profile = Self {
            vin: vin.to_string(),
            make: lookup(fields, variables::MAKE),
            model: lookup(fields, variables::MODEL),
            year: lookup(fields, variables::MODEL_YEAR),
            trim: full_trim.or_else(|| trim.clone()).or_else(|| series.clone()),
            trim_level: trim,
            series,
            body_class: lookup(fields, variables::BODY_CLASS),
            engine: lookup(fields, variables::ENGINE_MODEL)
                .or_else(|| lookup(fields, variables::DISPLACEMENT_L)),
            engine_config: lookup(fields, variables::ENGINE_CONFIGURATION),
            cylinders: lookup(fields, variables::ENGINE_CYLINDERS),
            displacement: lookup(fields, variables::DISPLACEMENT_L),
            transmission: lookup(fields, variables::TRANSMISSION_STYLE),
            transmission_speeds: lookup(fields, variables::TRANSMISSION_SPEEDS),
            drive_type: lookup(fields, variables::DRIVE_TYPE),
            fuel_type: lookup(fields, variables::FUEL_TYPE_PRIMARY),
            manufacturer: lookup(fields, variables::MANUFACTURER_NAME),
            plant: lookup(fields, variables::PLANT_CITY)
                .or_else(|| lookup(fields, variables::PLANT_COUNTRY)),
            vehicle_type: lookup(fields, variables::VEHICLE_TYPE),
            doors: lookup(fields, variables::DOORS),
            windows: lookup(fields, variables::WINDOWS),
            seat_rows: lookup(fields, variables::SEAT_ROWS),
        };

        debug!(vin, decoded_fields = fields.len(), "normalized vehicle profile");
        Ok(profile)
    }
}

/// Compose the descriptive trim string from series and trim designations.
///
/// Tokens are appended in series, series2, trim, trim2 order; series2
/// and trim2 are dropped when they exactly repeat their counterpart.
fn compose_trim(
    series: Option<&str>,
    series2: Option<&str>,
    trim: Option<&str>,
    trim2: Option<&str>,
) -> Option<String> {
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    if let Some(s) = series {
        parts.push(s);
    }
    if let Some(s2) = series2 {
        if series != Some(s2) {
            parts.push(s2);
        }
    }
    if let Some(t) = trim {
        parts.push(t);
    }
    if let Some(t2) = trim2 {
        if trim != Some(t2) {
            parts.push(t2);
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
