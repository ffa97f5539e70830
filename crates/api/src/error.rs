//! API Error Mapping
//!
//! Funnels every upstream and validation failure into one type so the
//! JSON envelope and status-code mapping live in a single place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blackbook_client::BlackbookError;
use listings_client::ListingsError;
use serde_json::json;
use vin_profile::ProfileError;
use vin_registry::RegistryError;

/// Handler-level error with its HTTP mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request input (400)
    BadRequest(String),
    /// Upstream provider rejected or failed the request (400)
    Upstream(String),
    /// Upstream provider timed out (504)
    UpstreamTimeout(String),
    /// Unexpected failure (500)
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Upstream(message) => (StatusCode::BAD_REQUEST, message),
            Self::UpstreamTimeout(message) => (StatusCode::GATEWAY_TIMEOUT, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        let body = Json(json!({ "success": false, "error": error }));
        (status, body).into_response()
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        if err.is_timeout() {
            return Self::UpstreamTimeout("VIN registry timeout".to_string());
        }
        match err {
            RegistryError::Precondition(inner) => inner.into(),
            other => Self::Upstream(format!("VIN registry error: {other}")),
        }
    }
}

impl From<BlackbookError> for ApiError {
    fn from(err: BlackbookError) -> Self {
        if err.is_timeout() {
            return Self::UpstreamTimeout("valuation provider timeout".to_string());
        }
        Self::Upstream(err.to_string())
    }
}

impl From<ListingsError> for ApiError {
    fn from(err: ListingsError) -> Self {
        if err.is_timeout() {
            return Self::UpstreamTimeout("listings source timeout".to_string());
        }
        Self::Internal(format!("Error fetching market listings: {err}"))
    }
}
