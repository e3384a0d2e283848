//! Harvest models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LotContract;
use crate::types::{LotId, empty_as_none};

/// Form draft for loading a harvest truck against a lot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarvestDraft {
    #[serde(rename = "lote_id")]
    pub lot_id: LotId,
    #[serde(skip)]
    pub lot_name: String,
    #[serde(rename = "kilos", default, deserialize_with = "empty_as_none")]
    pub weight_kg: Option<Decimal>,
}

impl HarvestDraft {
    pub fn for_lot(lot: &LotContract) -> Self {
        Self {
            lot_id: lot.lot_id,
            lot_name: lot.name.clone(),
            weight_kg: None,
        }
    }
}
