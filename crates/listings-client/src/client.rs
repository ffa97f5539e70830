//! Listings Search Client

use std::time::Duration;

use market_compare::MarketListing;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ListingsError;

/// Default cap on returned listings
const DEFAULT_MAX_RESULTS: usize = 15;

/// Listings client configuration
#[derive(Debug, Clone)]
pub struct ListingsConfig {
    /// Base URL of the listings search API
    pub base_url: String,
    /// API key; sent as `x-api-key` when non-empty
    pub api_key: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.marketcheck.com/v2".to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

/// One listings search
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub year: i32,
    pub make: String,
    pub model: String,
    /// Narrow results to one province when set
    pub province: Option<String>,
    pub max_results: usize,
}

impl SearchQuery {
    /// Query for a year/make/model with the default result cap
    pub fn new(year: i32, make: &str, model: &str) -> Self {
        Self {
            year,
            make: make.to_string(),
            model: model.to_string(),
            province: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    listings: Vec<MarketListing>,
}

/// Client for the market-listings search source
#[derive(Debug, Clone)]
pub struct ListingsClient {
    config: ListingsConfig,
    http: reqwest::Client,
}

impl ListingsClient {
    /// Create a client with the given configuration
    pub fn new(config: ListingsConfig) -> Result<Self, ListingsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    /// Search comparable listings; at most `query.max_results` returned.
    ///
    /// Listings parse leniently: unknown fields ride along opaquely and
    /// a missing price is tolerated.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<MarketListing>, ListingsError> {
        let url = format!("{}/listings", self.config.base_url);
        let mut params: Vec<(&str, String)> = vec![
            ("year", query.year.to_string()),
            ("make", query.make.clone()),
            ("model", query.model.clone()),
            ("limit", query.max_results.to_string()),
        ];
        if let Some(province) = &query.province {
            params.push(("province", province.clone()));
        }

        let mut request = self.http.get(&url).query(&params);
        if !self.config.api_key.is_empty() {
            request = request.header("x-api-key", &self.config.api_key);
        }

        debug!(
            year = query.year,
            make = %query.make,
            model = %query.model,
            "searching market listings"
        );
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "listings source error status");
            return Err(ListingsError::Status(status.as_u16()));
        }

        let envelope: SearchEnvelope = response.json().await?;
        let mut listings = envelope.listings;
        listings.truncate(query.max_results);
        debug!(count = listings.len(), "listings received");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ListingsClient {
        ListingsClient::new(ListingsConfig {
            base_url: server.url("/v2"),
            api_key: "test-key".to_string(),
            timeout_secs: 2,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_parses_listings() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/listings")
                .query_param("year", "2020")
                .query_param("make", "Toyota")
                .query_param("model", "Camry")
                .query_param("limit", "15")
                .header("x-api-key", "test-key");
            then.status(200).json_body(json!({
                "listings": [
                    { "price": 21500, "year": 2020, "make": "Toyota", "mileage": 45000 },
                    { "year": 2020, "make": "Toyota", "source_url": "https://example.com/2" },
                ],
            }));
        });

        let listings = client_for(&server)
            .search(&SearchQuery::new(2020, "Toyota", "Camry"))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].price, Some(21_500.0));
        assert_eq!(listings[1].price, None);
        assert_eq!(listings[1].details["source_url"], "https://example.com/2");
    }

    #[tokio::test]
    async fn test_province_narrows_search() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/listings")
                .query_param("province", "Ontario");
            then.status(200).json_body(json!({ "listings": [] }));
        });

        let mut query = SearchQuery::new(2020, "Toyota", "Camry");
        query.province = Some("Ontario".to_string());
        let listings = client_for(&server).search(&query).await.unwrap();
        mock.assert();
        assert!(listings.is_empty());
    }

    #[tokio::test]
    async fn test_result_cap_is_applied() {
        let server = MockServer::start();
        let over_cap: Vec<_> = (0..20).map(|i| json!({ "price": 1000 + i })).collect();
        server.mock(|when, then| {
            when.method(GET).path("/v2/listings");
            then.status(200).json_body(json!({ "listings": over_cap }));
        });

        let mut query = SearchQuery::new(2020, "Toyota", "Camry");
        query.max_results = 5;
        let listings = client_for(&server).search(&query).await.unwrap();
        assert_eq!(listings.len(), 5);
    }

    #[tokio::test]
    async fn test_non_success_status_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/listings");
            then.status(429);
        });

        let err = client_for(&server)
            .search(&SearchQuery::new(2020, "Toyota", "Camry"))
            .await
            .unwrap_err();
        assert!(matches!(err, ListingsError::Status(429)));
    }
}
