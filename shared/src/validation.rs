//! Validation of form drafts before they are submitted
//!
//! Each draft checks the same things the dashboard forms require. Messages
//! are carried in English and Spanish.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    AnimalDraft, ExpenseDraft, HarvestDraft, LotDraft, RainfallDraft, RelocationDraft,
    RemovalDraft, ReproductiveEventDraft, SaleDraft, SiloDraft, SiloSaleDraft, WeighingDraft,
};
use crate::types::GeoPoint;

/// A single invalid form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
    pub message_es: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str, message_es: &'static str) -> Self {
        Self {
            field,
            message,
            message_es,
        }
    }
}

/// Drafts that can be checked before submission
pub trait Validate {
    fn validate(&self) -> Result<(), FieldError>;
}

fn require_text(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(
            field,
            "This field is required",
            "Este campo es obligatorio",
        ));
    }
    Ok(())
}

fn require_positive(field: &'static str, value: Option<Decimal>) -> Result<(), FieldError> {
    match value {
        None => Err(FieldError::new(
            field,
            "This field is required",
            "Este campo es obligatorio",
        )),
        Some(v) if v <= Decimal::ZERO => Err(FieldError::new(
            field,
            "Must be greater than zero",
            "Debe ser mayor que cero",
        )),
        Some(_) => Ok(()),
    }
}

fn require_non_negative(field: &'static str, value: Option<Decimal>) -> Result<(), FieldError> {
    match value {
        None => Err(FieldError::new(
            field,
            "This field is required",
            "Este campo es obligatorio",
        )),
        Some(v) if v < Decimal::ZERO => Err(FieldError::new(
            field,
            "Cannot be negative",
            "No puede ser negativo",
        )),
        Some(_) => Ok(()),
    }
}

/// Validate an optional `lat`/`lng` pair: both or neither, and in range
pub fn validate_coordinates(lat: Option<f64>, lng: Option<f64>) -> Result<(), FieldError> {
    match (lat, lng) {
        (None, None) => Ok(()),
        (Some(latitude), Some(longitude)) => {
            if GeoPoint::new(latitude, longitude).is_valid() {
                Ok(())
            } else {
                Err(FieldError::new(
                    "lat",
                    "Coordinates out of range",
                    "Coordenadas fuera de rango",
                ))
            }
        }
        _ => Err(FieldError::new(
            "lat",
            "Latitude and longitude must be set together",
            "Latitud y longitud deben cargarse juntas",
        )),
    }
}

/// Validate a percentage is between 0 and 100
pub fn validate_percentage(field: &'static str, value: Decimal) -> Result<(), FieldError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(FieldError::new(
            field,
            "Percentage must be between 0 and 100",
            "El porcentaje debe estar entre 0 y 100",
        ));
    }
    Ok(())
}

impl Validate for LotDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("nombreLote", &self.name)?;
        // the backend stores a blank surface as 0
        require_non_negative("hectareas", self.hectares)?;
        require_text("propietario", &self.owner)?;
        validate_percentage("porcentaje", self.owner_share_percent)?;
        validate_coordinates(self.lat, self.lng)
    }
}

impl Validate for HarvestDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_positive("kilos", self.weight_kg)
    }
}

impl Validate for AnimalDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("caravana", &self.tag)?;
        if let Some(weight) = self.initial_weight_kg {
            require_positive("peso_inicial", Some(weight))?;
        }
        Ok(())
    }
}

impl Validate for WeighingDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_positive("kilos", self.weight_kg)
    }
}

impl Validate for ExpenseDraft {
    fn validate(&self) -> Result<(), FieldError> {
        if self.lot_id.is_some() == self.animal_id.is_some() {
            return Err(FieldError::new(
                "destino",
                "An expense targets exactly one lot or one animal",
                "El gasto debe imputarse a un lote o a un animal",
            ));
        }
        require_text("concepto", &self.concept)?;
        require_positive("monto", self.amount)
    }
}

impl Validate for SaleDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("comprador", &self.buyer)?;
        require_positive("kilos", self.weight_kg)?;
        require_positive("precio_kg", self.price_per_kg)
    }
}

impl Validate for RemovalDraft {
    fn validate(&self) -> Result<(), FieldError> {
        if self.kind.is_priced() {
            require_positive("kilos", self.weight_kg)?;
            require_positive("precio_kg", self.price_per_kg)?;
        }
        Ok(())
    }
}

impl Validate for SiloDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("nombre", &self.name)?;
        require_text("grano", &self.grain)?;
        require_positive("capacidad", self.capacity_kg)?;
        validate_coordinates(self.lat, self.lng)
    }
}

impl Validate for SiloSaleDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("comprador", &self.buyer)?;
        require_positive("kilos", self.weight_kg)?;
        require_positive("precio_kg", self.price_per_kg)?;
        if self.weight_kg.unwrap_or_default() > self.available_kg {
            return Err(FieldError::new(
                "kilos",
                "Not enough stock in the silo",
                "No hay stock suficiente en el silo",
            ));
        }
        Ok(())
    }
}

impl Validate for RainfallDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_non_negative("milimetros", self.millimeters)
    }
}

impl Validate for ReproductiveEventDraft {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

impl Validate for RelocationDraft {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}
