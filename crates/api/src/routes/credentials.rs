//! Credential Check Route

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// Verify the configured valuation-provider credentials
pub async fn test_credentials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    state.blackbook.test_credentials().await?;
    Ok(Json(json!({ "success": true })))
}
