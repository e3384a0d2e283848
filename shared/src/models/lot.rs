//! Lot and land contract models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{GeoPoint, LotId, empty_as_none};

/// A lot together with its land contract and harvest settlement, as listed
/// by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotContract {
    /// Contract id
    pub id: i64,
    #[serde(rename = "lote_id")]
    pub lot_id: LotId,
    #[serde(rename = "lote")]
    pub name: String,
    #[serde(rename = "hectareas")]
    pub hectares: Decimal,
    /// Landowner or counterparty
    #[serde(rename = "propietario")]
    pub owner: String,
    #[serde(rename = "tipo")]
    pub kind: ContractKind,
    /// Share of the harvest kept by the landowner (0-100)
    #[serde(rename = "porcentaje")]
    pub owner_share_percent: Decimal,
    #[serde(rename = "total_cosechado", default)]
    pub harvested_kg: Decimal,
    #[serde(rename = "kilos_propios", default)]
    pub producer_kg: Decimal,
    #[serde(rename = "kilos_dueno", default)]
    pub owner_kg: Decimal,
    #[serde(rename = "total_gastos", default)]
    pub total_expenses: Decimal,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(rename = "animales_count", default)]
    pub animal_count: u32,
}

impl LotContract {
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.lat, self.lng)
    }
}

/// Kind of land contract
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ContractKind {
    /// Share-cropping: the landowner keeps a percentage of the harvest
    #[default]
    #[serde(rename = "APARCERIA")]
    ShareCropping,
    #[serde(rename = "PROPIO")]
    Owned,
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractKind::ShareCropping => write!(f, "Aparcería"),
            ContractKind::Owned => write!(f, "Propio"),
        }
    }
}

/// Form draft for creating or editing a lot and its contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LotDraft {
    #[serde(rename = "nombreLote")]
    pub name: String,
    #[serde(rename = "hectareas", default, deserialize_with = "empty_as_none")]
    pub hectares: Option<Decimal>,
    #[serde(rename = "propietario")]
    pub owner: String,
    #[serde(rename = "tipo")]
    pub kind: ContractKind,
    #[serde(rename = "porcentaje")]
    pub owner_share_percent: Decimal,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub lng: Option<f64>,
}

impl LotDraft {
    /// Draft pre-populated from an existing lot, for editing
    pub fn from_lot(lot: &LotContract) -> Self {
        Self {
            name: lot.name.clone(),
            hectares: Some(lot.hectares),
            owner: lot.owner.clone(),
            kind: lot.kind,
            owner_share_percent: lot.owner_share_percent,
            lat: lot.lat,
            lng: lot.lng,
        }
    }

    /// Empty draft placed at a map point
    pub fn at(point: GeoPoint) -> Self {
        let mut draft = Self::default();
        draft.set_location(point);
        draft
    }

    pub fn set_location(&mut self, point: GeoPoint) {
        self.lat = Some(point.latitude);
        self.lng = Some(point.longitude);
    }

    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.lat, self.lng)
    }
}
