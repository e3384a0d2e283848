//! Configuration management for the AgroNexo dashboard client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AGRONEXO_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::store::RefreshPolicy;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Farm backend configuration
    pub api: ApiConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Collection refresh behaviour
    #[serde(default)]
    pub refresh: RefreshConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the farm backend, including the `/api` prefix
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Forecast API endpoint
    pub api_endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Location shown when no lot has coordinates
    pub default_latitude: f64,
    pub default_longitude: f64,
    pub default_label: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RefreshConfig {
    #[serde(default)]
    pub policy: RefreshPolicy,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRONEXO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let api = ApiConfig::default();
        let weather = WeatherConfig::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", api.base_url)?
            .set_default("api.timeout_secs", api.timeout_secs)?
            .set_default("weather.api_endpoint", weather.api_endpoint)?
            .set_default("weather.timeout_secs", weather.timeout_secs)?
            .set_default("weather.default_latitude", weather.default_latitude)?
            .set_default("weather.default_longitude", weather.default_longitude)?
            .set_default("weather.default_label", weather.default_label)?
            .set_default("refresh.policy", "all")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRONEXO_ prefix)
            .add_source(
                Environment::with_prefix("AGRONEXO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.open-meteo.com/v1".to_string(),
            timeout_secs: 10,
            default_latitude: -26.78,
            default_longitude: -60.85,
            default_label: "Chaco (General)".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api: ApiConfig::default(),
            weather: WeatherConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}
