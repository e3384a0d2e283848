//! Rain gauge records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{LotId, empty_as_none};

/// Form draft for a rain gauge reading, optionally tied to a lot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RainfallDraft {
    #[serde(rename = "lote_id")]
    pub lot_id: Option<LotId>,
    #[serde(rename = "milimetros", default, deserialize_with = "empty_as_none")]
    pub millimeters: Option<Decimal>,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
}
