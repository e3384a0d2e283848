//! Expense models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Animal, LotContract};
use crate::types::{AnimalId, LotId, empty_as_none};

/// Expense category tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExpenseCategory {
    #[default]
    #[serde(rename = "INSUMO")]
    Supplies,
    #[serde(rename = "LABOR")]
    Labor,
    #[serde(rename = "SANITARIO")]
    Health,
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseCategory::Supplies => write!(f, "Insumo"),
            ExpenseCategory::Labor => write!(f, "Labor"),
            ExpenseCategory::Health => write!(f, "Sanitario"),
        }
    }
}

/// What an expense is charged to
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseTarget {
    Lot { id: LotId, name: String },
    Animal { id: AnimalId, tag: String },
}

impl ExpenseTarget {
    pub fn lot(lot: &LotContract) -> Self {
        ExpenseTarget::Lot {
            id: lot.lot_id,
            name: lot.name.clone(),
        }
    }

    pub fn animal(animal: &Animal) -> Self {
        ExpenseTarget::Animal {
            id: animal.id,
            tag: animal.tag.clone(),
        }
    }

    /// Destination label shown in the expense modal
    pub fn label(&self) -> String {
        match self {
            ExpenseTarget::Lot { name, .. } => name.clone(),
            ExpenseTarget::Animal { tag, .. } => format!("RP: {}", tag),
        }
    }
}

/// Form draft for an expense. Exactly one of `lot_id` / `animal_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExpenseDraft {
    #[serde(rename = "lote_id")]
    pub lot_id: Option<LotId>,
    pub animal_id: Option<AnimalId>,
    #[serde(skip)]
    pub destination: String,
    #[serde(rename = "concepto")]
    pub concept: String,
    #[serde(rename = "monto", default, deserialize_with = "empty_as_none")]
    pub amount: Option<Decimal>,
    #[serde(rename = "categoria")]
    pub category: ExpenseCategory,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    pub fn for_target(target: &ExpenseTarget) -> Self {
        let (lot_id, animal_id) = match target {
            ExpenseTarget::Lot { id, .. } => (Some(*id), None),
            ExpenseTarget::Animal { id, .. } => (None, Some(*id)),
        };
        Self {
            lot_id,
            animal_id,
            destination: target.label(),
            ..Self::default()
        }
    }
}
