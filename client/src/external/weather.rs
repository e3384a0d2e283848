//! Weather API client for fetching current conditions
//!
//! Integrates with the Open-Meteo forecast API: current temperature and wind
//! plus today's precipitation sum.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{GeoPoint, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::error::{ClientError, ClientResult};

/// Source of weather snapshots
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, point: GeoPoint) -> ClientResult<WeatherSnapshot>;
}

/// Open-Meteo API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OMForecastResponse {
    current_weather: OMCurrentWeather,
    daily: Option<OMDaily>,
}

#[derive(Debug, Deserialize)]
struct OMCurrentWeather {
    temperature: f64,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct OMDaily {
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_endpoint.clone()))
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Convert the Open-Meteo response to our format
    fn convert_response(&self, point: GeoPoint, data: OMForecastResponse) -> WeatherSnapshot {
        let precipitation = data
            .daily
            .and_then(|d| d.precipitation_sum.into_iter().next().flatten());

        WeatherSnapshot {
            location: point,
            temperature_celsius: to_decimal(data.current_weather.temperature),
            wind_speed_kmh: to_decimal(data.current_weather.windspeed),
            precipitation_mm: precipitation.map(to_decimal),
        }
    }
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .unwrap_or_default()
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current(&self, point: GeoPoint) -> ClientResult<WeatherSnapshot> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&daily=precipitation_sum&timezone=auto",
            self.base_url, point.latitude, point.longitude
        );
        tracing::debug!(%url, "weather request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::WeatherUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::WeatherUnavailable(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: OMForecastResponse = response.json().await.map_err(|e| ClientError::Decode {
            what: "weather forecast",
            reason: e.to_string(),
        })?;

        Ok(self.convert_response(point, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn client() -> WeatherClient {
        WeatherClient::with_client(Client::new(), "http://localhost".to_string())
    }

    #[test]
    fn test_convert_forecast_response() {
        let data: OMForecastResponse = serde_json::from_str(
            r#"{
                "current_weather": {"temperature": 31.4, "windspeed": 12.6, "winddirection": 90},
                "daily": {"time": ["2024-01-10"], "precipitation_sum": [4.2, 0.0]}
            }"#,
        )
        .unwrap();
        let point = GeoPoint::new(-26.78, -60.85);
        let snapshot = client().convert_response(point, data);

        assert_eq!(snapshot.location, point);
        assert_eq!(snapshot.temperature_celsius, dec("31.4"));
        assert_eq!(snapshot.wind_speed_kmh, dec("12.6"));
        assert_eq!(snapshot.precipitation_mm, Some(dec("4.2")));
    }

    #[test]
    fn test_missing_precipitation() {
        let data: OMForecastResponse = serde_json::from_str(
            r#"{"current_weather": {"temperature": 20, "windspeed": 0},
                "daily": {"precipitation_sum": [null]}}"#,
        )
        .unwrap();
        let snapshot = client().convert_response(GeoPoint::new(0.0, 0.0), data);

        assert_eq!(snapshot.precipitation_mm, None);
        assert_eq!(snapshot.wind_speed_kmh, Decimal::ZERO);
    }
}
