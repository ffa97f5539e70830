//! Server Configuration
//!
//! Defaults overridable from `APP_*` environment variables, e.g.
//! `APP_PORT=8080` or `APP_BLACKBOOK__USERNAME=operator`.

use blackbook_client::BlackbookConfig;
use config::{Config, ConfigError, Environment};
use listings_client::ListingsConfig;
use serde::Deserialize;
use vin_registry::RegistryConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub registry: RegistrySettings,
    pub blackbook: BlackbookSettings,
    pub listings: ListingsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlackbookSettings {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub provinces: Vec<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load defaults and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = BlackbookConfig::default();
        let registry = RegistryConfig::default();
        let listings = ListingsConfig::default();

        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("registry.base_url", registry.base_url)?
            .set_default("registry.timeout_secs", registry.timeout_secs as i64)?
            .set_default("blackbook.endpoint", defaults.endpoint)?
            .set_default("blackbook.username", defaults.username)?
            .set_default("blackbook.password", defaults.password)?
            .set_default("blackbook.provinces", defaults.provinces)?
            .set_default("blackbook.timeout_secs", defaults.timeout_secs as i64)?
            .set_default("listings.base_url", listings.base_url)?
            .set_default("listings.api_key", listings.api_key)?
            .set_default("listings.timeout_secs", listings.timeout_secs as i64)?
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            base_url: self.registry.base_url.clone(),
            timeout_secs: self.registry.timeout_secs,
        }
    }

    pub fn blackbook_config(&self) -> BlackbookConfig {
        BlackbookConfig {
            endpoint: self.blackbook.endpoint.clone(),
            username: self.blackbook.username.clone(),
            password: self.blackbook.password.clone(),
            provinces: self.blackbook.provinces.clone(),
            timeout_secs: self.blackbook.timeout_secs,
        }
    }

    pub fn listings_config(&self) -> ListingsConfig {
        ListingsConfig {
            base_url: self.listings.base_url.clone(),
            api_key: self.listings.api_key.clone(),
            timeout_secs: self.listings.timeout_secs,
        }
    }
}
