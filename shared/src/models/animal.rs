//! Livestock models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AnimalId, LotId, empty_as_none};

/// Breeds offered by the animal form
pub const BREEDS: &[&str] = &["Braford", "Brangus", "Angus"];

/// Categories offered by the animal form
pub const CATEGORIES: &[&str] = &["Ternero", "Novillo", "Vaca"];

/// An animal as listed by the backend, with its weighing and cost aggregates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    pub id: AnimalId,
    /// Ear tag (caravana / RP)
    #[serde(rename = "caravana")]
    pub tag: String,
    #[serde(rename = "raza")]
    pub breed: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "peso_actual", default)]
    pub current_weight_kg: Decimal,
    /// Average daily gain between the last two weighings (kg/day)
    #[serde(rename = "gdp", default)]
    pub daily_gain_kg: Decimal,
    #[serde(rename = "ultimo_pesaje", default)]
    pub last_weighing: Option<String>,
    #[serde(rename = "lote_id", default)]
    pub lot_id: Option<LotId>,
    #[serde(rename = "estado_repro", default)]
    pub reproductive_status: Option<String>,
    #[serde(rename = "costo_acumulado", default)]
    pub accumulated_cost: Decimal,
}

impl Animal {
    /// Label used on cards and expense destinations
    pub fn display_tag(&self) -> String {
        format!("RP: {}", self.tag)
    }
}

/// Form draft for registering a new animal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalDraft {
    #[serde(rename = "caravana")]
    pub tag: String,
    #[serde(rename = "raza")]
    pub breed: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "peso_inicial", default, deserialize_with = "empty_as_none")]
    pub initial_weight_kg: Option<Decimal>,
    /// Entry date; the backend uses today when absent
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub entry_date: Option<NaiveDate>,
}

impl Default for AnimalDraft {
    fn default() -> Self {
        Self {
            tag: String::new(),
            breed: BREEDS[0].to_string(),
            category: CATEGORIES[0].to_string(),
            initial_weight_kg: None,
            entry_date: None,
        }
    }
}

/// Form draft for a weigh-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeighingDraft {
    pub animal_id: AnimalId,
    /// Shown in the modal title only
    #[serde(skip)]
    pub tag: String,
    #[serde(rename = "kilos", default, deserialize_with = "empty_as_none")]
    pub weight_kg: Option<Decimal>,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
}

impl WeighingDraft {
    pub fn for_animal(animal: &Animal) -> Self {
        Self {
            animal_id: animal.id,
            tag: animal.tag.clone(),
            weight_kg: None,
            date: None,
        }
    }
}

/// Request body moving a set of animals to a lot, or out of any lot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkRelocation {
    pub animal_ids: Vec<AnimalId>,
    /// `None` means "unassigned"
    #[serde(rename = "lote_id")]
    pub destination: Option<LotId>,
}

/// Form draft for the relocation modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelocationDraft {
    pub destination: Option<LotId>,
}
