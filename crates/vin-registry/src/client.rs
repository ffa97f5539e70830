//! Registry HTTP Client

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};
use vin_profile::{DecodedField, ProfileError};

use crate::error::RegistryError;

/// Registry client configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the registry API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://vpic.nhtsa.dot.gov/api".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Decode envelope returned by the registry
#[derive(Debug, Deserialize)]
struct DecodeEnvelope {
    #[serde(rename = "Results")]
    results: Option<Vec<DecodedField>>,
}

/// Client for the VIN-decoding registry
#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a client with the given configuration
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    /// Fetch the decoded field sequence for a VIN.
    ///
    /// A payload without a results list is a precondition failure, not
    /// an empty decode.
    pub async fn decode_vin(&self, vin: &str) -> Result<Vec<DecodedField>, RegistryError> {
        let url = format!("{}/vehicles/DecodeVin/{}", self.config.base_url, vin);
        debug!(vin, "requesting VIN decode");

        let response = self.http.get(&url).query(&[("format", "json")]).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(vin, status = status.as_u16(), "registry rejected decode request");
            return Err(RegistryError::Status(status.as_u16()));
        }

        let envelope: DecodeEnvelope = response.json().await?;
        let results = envelope.results.ok_or(ProfileError::MissingResults)?;

        debug!(vin, fields = results.len(), "decoded VIN record received");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const VIN: &str = "1HGBH41JXMN109186";

    fn client_for(server: &MockServer) -> RegistryClient {
        RegistryClient::new(RegistryConfig {
            base_url: format!("{}/api", server.base_url()),
            timeout_secs: 2,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_decode_returns_field_sequence() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/api/vehicles/DecodeVin/{VIN}"))
                .query_param("format", "json");
            then.status(200).json_body(json!({
                "Count": 2,
                "Results": [
                    { "Variable": "Make", "Value": "HONDA" },
                    { "Variable": "Model", "Value": null },
                ],
            }));
        });

        let fields = client_for(&server).decode_vin(VIN).await.unwrap();
        mock.assert();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].variable.as_deref(), Some("Make"));
        assert_eq!(fields[0].value.as_deref(), Some("HONDA"));
        assert_eq!(fields[1].value, None);
    }

    #[tokio::test]
    async fn test_missing_results_is_a_precondition_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path_contains("DecodeVin");
            then.status(200).json_body(json!({ "Message": "no results here" }));
        });

        let err = client_for(&server).decode_vin(VIN).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Precondition(ProfileError::MissingResults)
        ));
    }

    #[tokio::test]
    async fn test_non_success_status_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path_contains("DecodeVin");
            then.status(503);
        });

        let err = client_for(&server).decode_vin(VIN).await.unwrap_err();
        assert!(matches!(err, RegistryError::Status(503)));
    }
}
