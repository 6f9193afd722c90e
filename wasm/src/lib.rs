//! BMI Companion WASM Module
//!
//! WebAssembly bindings over the shared domain crate so the single-page
//! client can parse input, compute BMI, and pick tips without a server
//! round-trip. Conversion failures surface as the same `0.0` sentinel the
//! rest of the application checks.

use bmi_companion_shared::bmi;
use bmi_companion_shared::tips::{select_tips, TipCategory};
use bmi_companion_shared::units;
use wasm_bindgen::prelude::*;

/// Convert a raw height string ("170cm", "5.5ft", "1.75") to meters.
/// Returns 0 for blank, unparsable, or ambiguous input.
#[wasm_bindgen]
pub fn convert_height(raw: &str) -> f64 {
    units::convert_height(raw)
}

/// Convert a raw weight string ("150lbs", "70kg", "70") to kilograms.
/// Returns 0 for blank, unparsable, or ambiguous input.
#[wasm_bindgen]
pub fn convert_weight(raw: &str) -> f64 {
    units::convert_weight(raw)
}

/// Calculate BMI from canonical measurements, rounded to two decimal
/// places. Returns 0 when either measurement is not strictly positive.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    match bmi::evaluate_bmi(height_m, weight_kg) {
        Ok(reading) => reading.value,
        Err(_) => 0.0,
    }
}

/// Get the category label ("Underweight", "Normal weight", "Overweight",
/// "Obesity") for a BMI value.
#[wasm_bindgen]
pub fn bmi_category(bmi_value: f64) -> String {
    bmi::classify_bmi(bmi_value).label().to_string()
}

/// Get the daily tip list for a category ("both", "exercise", "diet").
/// Unknown categories fall back to "both".
#[wasm_bindgen]
pub fn daily_tips(category: &str) -> Vec<String> {
    let category: TipCategory = category.parse().unwrap_or_default();
    select_tips(category).into_iter().map(String::from).collect()
}
