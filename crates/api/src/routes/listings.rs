//! Market Listings Route

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use listings_client::SearchQuery;
use market_compare::annotate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// Request body for `/api/market-listings`
#[derive(Debug, Deserialize)]
pub struct MarketListingsRequest {
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    /// Book retail value used as the comparison reference; 0 means none
    #[serde(default)]
    pub blackbook_retail: f64,
}

/// Search comparable listings and annotate each against the book value
pub async fn market_listings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MarketListingsRequest>,
) -> Result<Json<Value>, ApiError> {
    let make = body.make.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let model = body.model.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let year = body.year.as_ref().filter(|v| !v.is_null());
    let (Some(make), Some(model), Some(year)) = (make, model, year) else {
        return Err(ApiError::BadRequest(
            "Year, make, and model are required".to_string(),
        ));
    };
    let year = super::integer_field(Some(year), "Year")? as i32;

    let mut query = SearchQuery::new(year, make, model);
    query.province = body
        .province
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let found = state.listings.search(&query).await?;
    let annotated = annotate(&found, body.blackbook_retail);
    let count = annotated.len();

    Ok(Json(json!({
        "success": true,
        "listings": annotated,
        "blackbook_retail": body.blackbook_retail,
        "count": count,
    })))
}
