//! VIN Decode Route

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use vin_profile::{ensure_vin, VehicleProfile};

use crate::error::ApiError;
use crate::AppState;

/// Request body for `/api/decode-vin`
#[derive(Debug, Deserialize)]
pub struct DecodeVinRequest {
    #[serde(default)]
    pub vin: Option<String>,
}

/// Decode a VIN through the registry and normalize it into a profile
pub async fn decode_vin(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DecodeVinRequest>,
) -> Result<Json<Value>, ApiError> {
    let vin = super::require_vin(body.vin.as_deref())?;
    ensure_vin(&vin)?;

    let fields = state.registry.decode_vin(&vin).await?;
    let profile = VehicleProfile::normalize(&vin, &fields)?;

    Ok(Json(json!({ "success": true, "vehicle_info": profile })))
}
