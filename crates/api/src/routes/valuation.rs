//! Valuation Routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// Request body for `/api/fetch-vehicle`
#[derive(Debug, Deserialize)]
pub struct FetchVehicleRequest {
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub odometer: Option<Value>,
}

/// Request body for `/api/pricing-cards`
#[derive(Debug, Deserialize)]
pub struct PricingCardsRequest {
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub mileage: Option<Value>,
}

/// Fetch the odometer-adjusted book valuation for a VIN
pub async fn fetch_vehicle(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FetchVehicleRequest>,
) -> Result<Json<Value>, ApiError> {
    let vin = super::require_vin(body.vin.as_deref())?;
    let odometer = super::integer_field(body.odometer.as_ref(), "Odometer")?;

    let valuation = state.blackbook.fetch_vehicle(&vin, odometer).await?;
    Ok(Json(json!({ "success": true, "vehicle": valuation })))
}

/// Fetch per-province pricing cards for a VIN at a given mileage
pub async fn pricing_cards(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PricingCardsRequest>,
) -> Result<Json<Value>, ApiError> {
    let vin = super::require_vin(body.vin.as_deref())?;
    let mileage = super::integer_field(body.mileage.as_ref(), "Mileage")?;

    let cards = state.blackbook.fetch_pricing_cards(&vin, mileage).await?;
    Ok(Json(json!({ "cards": cards })))
}
