//! Reproductive event models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{AnimalId, empty_as_none};

/// Breeding or diagnostic event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReproductiveEventKind {
    #[default]
    #[serde(rename = "SERVICIO")]
    Service,
    #[serde(rename = "INSEMINACION")]
    Insemination,
    /// Pregnancy check (tacto)
    #[serde(rename = "TACTO")]
    PregnancyCheck,
    #[serde(rename = "PARTO")]
    Calving,
    #[serde(rename = "DESTETE")]
    Weaning,
}

impl std::fmt::Display for ReproductiveEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReproductiveEventKind::Service => write!(f, "Servicio"),
            ReproductiveEventKind::Insemination => write!(f, "Inseminación"),
            ReproductiveEventKind::PregnancyCheck => write!(f, "Tacto"),
            ReproductiveEventKind::Calving => write!(f, "Parto"),
            ReproductiveEventKind::Weaning => write!(f, "Destete"),
        }
    }
}

/// Event payload edited in the bulk reproductive event modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReproductiveEventDraft {
    #[serde(rename = "tipo")]
    pub kind: ReproductiveEventKind,
    #[serde(rename = "fecha", default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
    /// Free-text outcome, e.g. "PREÑADA" for a pregnancy check
    #[serde(rename = "resultado")]
    pub result: Option<String>,
    #[serde(rename = "observaciones")]
    pub notes: String,
}

/// Request body applying one event to a set of animals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkReproductiveEvent {
    pub animal_ids: Vec<AnimalId>,
    #[serde(flatten)]
    pub event: ReproductiveEventDraft,
}
