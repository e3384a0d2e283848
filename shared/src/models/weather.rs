//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

/// Current conditions at a point; never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: GeoPoint,
    pub temperature_celsius: Decimal,
    pub wind_speed_kmh: Decimal,
    /// Today's precipitation sum, when the forecast carries one
    pub precipitation_mm: Option<Decimal>,
}
