//! Grain storage models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::derived::estimated_total;
use crate::types::{GeoPoint, SiloId, empty_as_none};

/// Kind of grain storage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SiloKind {
    #[default]
    #[serde(rename = "SILO_BOLSA")]
    Bag,
    #[serde(rename = "AEREO")]
    Aerial,
    #[serde(rename = "GALPON")]
    Shed,
}

impl std::fmt::Display for SiloKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiloKind::Bag => write!(f, "Silo Bolsa"),
            SiloKind::Aerial => write!(f, "Silo Aéreo"),
            SiloKind::Shed => write!(f, "Galpón"),
        }
    }
}

/// A grain storage unit with its current stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Silo {
    pub id: SiloId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: SiloKind,
    #[serde(rename = "grano")]
    pub grain: String,
    #[serde(rename = "capacidad")]
    pub capacity_kg: Decimal,
    #[serde(rename = "stock_actual", default)]
    pub stock_kg: Decimal,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Silo {
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.lat, self.lng)
    }
}

/// Form draft for a new silo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiloDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: SiloKind,
    #[serde(rename = "grano")]
    pub grain: String,
    #[serde(rename = "capacidad", default, deserialize_with = "empty_as_none")]
    pub capacity_kg: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub lng: Option<f64>,
}

impl Default for SiloDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: SiloKind::default(),
            grain: "Soja".to_string(),
            capacity_kg: None,
            lat: None,
            lng: None,
        }
    }
}

impl SiloDraft {
    pub fn at(point: GeoPoint) -> Self {
        let mut draft = Self::default();
        draft.set_location(point);
        draft
    }

    pub fn set_location(&mut self, point: GeoPoint) {
        self.lat = Some(point.latitude);
        self.lng = Some(point.longitude);
    }
}

/// Form draft for selling grain out of a silo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiloSaleDraft {
    pub silo_id: SiloId,
    #[serde(skip)]
    pub silo_name: String,
    /// Stock at the time the modal was opened; bounds the sale locally
    #[serde(skip)]
    pub available_kg: Decimal,
    #[serde(rename = "comprador")]
    pub buyer: String,
    #[serde(rename = "kilos", default, deserialize_with = "empty_as_none")]
    pub weight_kg: Option<Decimal>,
    #[serde(rename = "precio_kg", default, deserialize_with = "empty_as_none")]
    pub price_per_kg: Option<Decimal>,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
}

impl SiloSaleDraft {
    pub fn for_silo(silo: &Silo) -> Self {
        Self {
            silo_id: silo.id,
            silo_name: silo.name.clone(),
            available_kg: silo.stock_kg,
            buyer: String::new(),
            weight_kg: None,
            price_per_kg: None,
            date: None,
        }
    }

    pub fn estimated_total(&self) -> Option<Decimal> {
        estimated_total(self.weight_kg, self.price_per_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silo_from_backend_json() {
        let json = r#"{
            "id": 4, "nombre": "Bolsa 1", "tipo": "SILO_BOLSA", "grano": "Maíz",
            "capacidad": 200000, "stock_actual": 150000, "lat": -26.7, "lng": -60.9
        }"#;
        let silo: Silo = serde_json::from_str(json).unwrap();

        assert_eq!(silo.kind, SiloKind::Bag);
        assert_eq!(silo.stock_kg, Decimal::from(150000));
        assert_eq!(silo.location(), Some(GeoPoint::new(-26.7, -60.9)));
    }

    #[test]
    fn test_silo_sale_keeps_stock_out_of_body() {
        let silo = Silo {
            id: SiloId(9),
            name: "Aéreo".to_string(),
            kind: SiloKind::Aerial,
            grain: "Soja".to_string(),
            capacity_kg: Decimal::from(50000),
            stock_kg: Decimal::from(1000),
            lat: None,
            lng: None,
        };
        let draft = SiloSaleDraft::for_silo(&silo);
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(draft.available_kg, Decimal::from(1000));
        assert_eq!(value["silo_id"], 9);
        assert!(value.get("available_kg").is_none());
    }
}
