//! Livestock sale and removal (baja) models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Animal;
use crate::derived::estimated_total;
use crate::types::{AnimalId, empty_as_none};

/// Form draft for selling an animal to a buyer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleDraft {
    pub animal_id: AnimalId,
    #[serde(skip)]
    pub tag: String,
    #[serde(rename = "comprador")]
    pub buyer: String,
    #[serde(rename = "kilos", default, deserialize_with = "empty_as_none")]
    pub weight_kg: Option<Decimal>,
    #[serde(rename = "precio_kg", default, deserialize_with = "empty_as_none")]
    pub price_per_kg: Option<Decimal>,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
}

impl SaleDraft {
    /// Starts from the animal's last recorded weight
    pub fn for_animal(animal: &Animal) -> Self {
        Self {
            animal_id: animal.id,
            tag: animal.tag.clone(),
            buyer: String::new(),
            weight_kg: Some(animal.current_weight_kg).filter(|w| !w.is_zero()),
            price_per_kg: None,
            date: None,
        }
    }

    pub fn estimated_total(&self) -> Option<Decimal> {
        estimated_total(self.weight_kg, self.price_per_kg)
    }
}

/// Terminal disposition of an animal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RemovalKind {
    #[default]
    #[serde(rename = "VENTA")]
    Sale,
    #[serde(rename = "MUERTE")]
    Death,
    #[serde(rename = "ROBO")]
    Theft,
    #[serde(rename = "DONACION")]
    Donation,
}

impl RemovalKind {
    /// Only a sale brings money in
    pub fn is_priced(&self) -> bool {
        matches!(self, RemovalKind::Sale)
    }
}

impl std::fmt::Display for RemovalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalKind::Sale => write!(f, "Venta"),
            RemovalKind::Death => write!(f, "Muerte"),
            RemovalKind::Theft => write!(f, "Robo"),
            RemovalKind::Donation => write!(f, "Donación"),
        }
    }
}

/// Form draft for removing an animal from the herd
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemovalDraft {
    pub animal_id: AnimalId,
    #[serde(skip)]
    pub tag: String,
    #[serde(rename = "motivo")]
    pub kind: RemovalKind,
    #[serde(rename = "kilos", default, deserialize_with = "empty_as_none")]
    pub weight_kg: Option<Decimal>,
    #[serde(rename = "precio_kg", default, deserialize_with = "empty_as_none")]
    pub price_per_kg: Option<Decimal>,
    #[serde(rename = "observaciones")]
    pub notes: String,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
}

impl RemovalDraft {
    pub fn for_animal(animal: &Animal) -> Self {
        Self {
            animal_id: animal.id,
            tag: animal.tag.clone(),
            kind: RemovalKind::default(),
            weight_kg: Some(animal.current_weight_kg).filter(|w| !w.is_zero()),
            price_per_kg: None,
            notes: String::new(),
            date: None,
        }
    }

    /// Zero for deaths, thefts and donations
    pub fn estimated_total(&self) -> Option<Decimal> {
        if self.kind.is_priced() {
            estimated_total(self.weight_kg, self.price_per_kg)
        } else {
            Some(Decimal::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn removal(kind: RemovalKind) -> RemovalDraft {
        RemovalDraft {
            animal_id: AnimalId(1),
            tag: "A-1".to_string(),
            kind,
            weight_kg: Some(dec("400")),
            price_per_kg: Some(dec("2.5")),
            notes: String::new(),
            date: None,
        }
    }

    #[test]
    fn test_removal_total_only_for_sales() {
        assert_eq!(removal(RemovalKind::Sale).estimated_total(), Some(dec("1000")));
        assert_eq!(removal(RemovalKind::Death).estimated_total(), Some(Decimal::ZERO));
        assert_eq!(removal(RemovalKind::Theft).estimated_total(), Some(Decimal::ZERO));
        assert_eq!(removal(RemovalKind::Donation).estimated_total(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_sale_total_with_empty_price_is_zero() {
        let draft = SaleDraft {
            animal_id: AnimalId(1),
            tag: String::new(),
            buyer: "Frigorífico".to_string(),
            weight_kg: Some(dec("380.5")),
            price_per_kg: None,
            date: None,
        };
        assert_eq!(draft.estimated_total(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_removal_kind_wire_names() {
        let value = serde_json::to_value(&removal(RemovalKind::Donation)).unwrap();
        assert_eq!(value["motivo"], "DONACION");
    }
}
