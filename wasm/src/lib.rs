//! WebAssembly module for the AgroNexo dashboard
//!
//! Provides client-side computation for:
//! - Sale and removal totals shown while a form is being filled
//! - Harvest split per role for the lot pie chart
//! - Silo fill level
//! - Form validation before submission

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::try_from(value).ok()
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn parse<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

/// Log to the browser console and hand the message to JavaScript
fn js_error(message: String) -> JsValue {
    let value = JsValue::from_str(&message);
    web_sys::console::warn_1(&value);
    value
}

/// Quantity × unit price; non-finite inputs count as zero. `undefined` when
/// the product overflows.
#[wasm_bindgen]
pub fn estimated_sale_total(quantity: f64, unit_price: f64) -> Option<f64> {
    shared::estimated_total(to_decimal(quantity), to_decimal(unit_price)).map(to_f64)
}

fn removal_total(kind: &str, quantity: f64, unit_price: f64) -> Result<Option<f64>, String> {
    let kind: RemovalKind = parse("removal kind", &format!("\"{}\"", kind))?;
    if !kind.is_priced() {
        return Ok(Some(0.0));
    }
    Ok(estimated_sale_total(quantity, unit_price))
}

/// Value of a removal (`VENTA`, `MUERTE`, `ROBO`, `DONACION`)
#[wasm_bindgen]
pub fn estimated_removal_total(
    kind: &str,
    quantity: f64,
    unit_price: f64,
) -> Result<Option<f64>, JsValue> {
    removal_total(kind, quantity, unit_price).map_err(js_error)
}

fn split_json(lot_json: &str, role: &str) -> Result<Option<String>, String> {
    let lot: LotContract = parse("lot", lot_json)?;
    let role: Role = parse("role", &format!("\"{}\"", role))?;
    shared::share_split(&lot, role)
        .map(|split| serde_json::to_string(&split).map_err(|e| e.to_string()))
        .transpose()
}

/// `{"mine_kg", "other_kg"}` for a lot seen as `PRODUCTOR` or `DUENO`;
/// `undefined` until something was harvested
#[wasm_bindgen]
pub fn harvest_share_split(lot_json: &str, role: &str) -> Result<Option<String>, JsValue> {
    split_json(lot_json, role).map_err(js_error)
}

fn fill_percent(silo_json: &str) -> Result<Option<f64>, String> {
    let silo: Silo = parse("silo", silo_json)?;
    Ok(shared::silo_fill_percent(&silo).map(to_f64))
}

/// Stock as a percentage of capacity, one decimal
#[wasm_bindgen]
pub fn silo_fill_percent(silo_json: &str) -> Result<Option<f64>, JsValue> {
    fill_percent(silo_json).map_err(js_error)
}

fn check<T: DeserializeOwned + Validate>(what: &str, json: &str) -> Result<(), String> {
    let draft: T = parse(what, json)?;
    draft
        .validate()
        .map_err(|e| format!("{}: {}", e.field, e.message_es))
}

fn validate_json(form: &str, draft_json: &str) -> Result<(), String> {
    match form {
        "lote" => check::<LotDraft>(form, draft_json),
        "cosecha" => check::<HarvestDraft>(form, draft_json),
        "lluvia" => check::<RainfallDraft>(form, draft_json),
        "animal" => check::<AnimalDraft>(form, draft_json),
        "pesaje" => check::<WeighingDraft>(form, draft_json),
        "gasto" => check::<ExpenseDraft>(form, draft_json),
        "venta" => check::<SaleDraft>(form, draft_json),
        "baja" => check::<RemovalDraft>(form, draft_json),
        "silo" => check::<SiloDraft>(form, draft_json),
        "evento_reproductivo" => check::<ReproductiveEventDraft>(form, draft_json),
        other => Err(format!("Unknown form: {}", other)),
    }
}

/// Validate a form draft as it would be sent to the backend. The error is
/// the Spanish message for the first offending field.
#[wasm_bindgen]
pub fn validate_draft(form: &str, draft_json: &str) -> Result<(), JsValue> {
    validate_json(form, draft_json).map_err(js_error)
}

fn check_silo_sale(draft_json: &str, available_kg: f64) -> Result<(), String> {
    let mut draft: SiloSaleDraft = parse("venta_silo", draft_json)?;
    draft.available_kg = to_decimal(available_kg).unwrap_or_default();
    draft
        .validate()
        .map_err(|e| format!("{}: {}", e.field, e.message_es))
}

/// Validate a grain sale against the silo's current stock
#[wasm_bindgen]
pub fn validate_silo_sale(draft_json: &str, available_kg: f64) -> Result<(), JsValue> {
    check_silo_sale(draft_json, available_kg).map_err(js_error)
}

/// Latitude/longitude pair is within range
#[wasm_bindgen]
pub fn coordinates_valid(latitude: f64, longitude: f64) -> bool {
    GeoPoint::new(latitude, longitude).is_valid()
}
