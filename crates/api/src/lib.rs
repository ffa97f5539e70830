//! Vehicle Pricing Aggregator API
//!
//! HTTP server fusing three external sources into one view of a
//! vehicle: the government VIN registry (identity), the Blackbook
//! valuation provider (book value), and the market-listings search
//! source (asking prices).

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod routes;

pub use config::{AppConfig, BlackbookSettings, ListingsSettings, RegistrySettings};
pub use error::ApiError;

use blackbook_client::BlackbookClient;
use listings_client::ListingsClient;
use vin_registry::RegistryClient;

/// Service name reported by the health endpoint
const SERVICE_NAME: &str = "vehicle-pricing-aggregator";

/// Application state shared across handlers.
///
/// Everything here is immutable after startup, so handlers share it
/// through a plain `Arc` without locking.
pub struct AppState {
    /// VIN registry client
    pub registry: RegistryClient,
    /// Valuation provider client
    pub blackbook: BlackbookClient,
    /// Market-listings client
    pub listings: ListingsClient,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build the provider clients from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            registry: RegistryClient::new(config.registry_config())?,
            blackbook: BlackbookClient::new(config.blackbook_config())?,
            listings: ListingsClient::new(config.listings_config())?,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        })
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: u64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/decode-vin", post(routes::decode::decode_vin))
        .route("/api/market-listings", post(routes::listings::market_listings))
        .route("/api/fetch-vehicle", post(routes::valuation::fetch_vehicle))
        .route("/api/pricing-cards", post(routes::valuation::pricing_cards))
        .route("/api/test-credentials", post(routes::credentials::test_credentials))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp,
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = create_router(state);
    let addr = config.bind_addr();

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
