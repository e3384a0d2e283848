//! Browser tests for the exported functions
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use agronexo_wasm::{
    coordinates_valid, estimated_removal_total, estimated_sale_total, validate_draft,
    validate_silo_sale,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn sale_total_overflow_is_undefined() {
    assert_eq!(estimated_sale_total(380.0, 2.5), Some(950.0));
    assert_eq!(estimated_sale_total(1e20, 1e20), None);
}

#[wasm_bindgen_test]
fn unknown_removal_kind_is_rejected() {
    assert_eq!(estimated_removal_total("ROBO", 400.0, 2.0).ok(), Some(Some(0.0)));
    let err = estimated_removal_total("PERDIDA", 400.0, 2.0).unwrap_err();
    assert!(err.as_string().unwrap().contains("removal kind"));
}

#[wasm_bindgen_test]
fn untouched_animal_form_is_valid() {
    let animal = r#"{"caravana": "A-001", "raza": "Braford", "categoria": "Ternero",
        "peso_inicial": "", "fecha": ""}"#;
    assert!(validate_draft("animal", animal).is_ok());

    let err = validate_draft("animal", r#"{"caravana": "", "raza": "", "categoria": ""}"#)
        .unwrap_err();
    assert!(err.as_string().unwrap().starts_with("caravana:"));
}

#[wasm_bindgen_test]
fn silo_sale_checks_stock() {
    let draft = r#"{"silo_id": 1, "comprador": "Cargill", "kilos": "6000",
        "precio_kg": "0.3", "fecha": ""}"#;
    assert!(validate_silo_sale(draft, 10000.0).is_ok());
    assert!(validate_silo_sale(draft, 5000.0).is_err());
}

#[wasm_bindgen_test]
fn coordinates_in_range() {
    assert!(coordinates_valid(-26.78, -60.85));
    assert!(!coordinates_valid(0.0, 200.0));
}
