//! API request and response types
//!
//! Shared between the backend handlers and any client that talks to the
//! JSON API. Raw measurements stay strings here; conversion to canonical
//! units happens server-side.

use crate::bmi::BmiCategory;
use crate::tips::TipCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI
// ============================================================================

/// POST /api/v1/bmi request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateBmiRequest {
    /// Raw height input, e.g. "170cm", "5.5ft" or "1.75"
    pub height: String,
    /// Raw weight input, e.g. "70kg", "150lbs" or "70"
    pub weight: String,
}

/// BMI calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    /// BMI value, rounded to two decimal places
    pub bmi: f64,
    /// Category band identifier
    pub category: BmiCategory,
    /// Human-readable category label
    pub category_label: String,
    /// Height the value was computed from, in meters
    pub height_m: f64,
    /// Weight the value was computed from, in kilograms
    pub weight_kg: f64,
}

// ============================================================================
// Tips
// ============================================================================

/// Query parameters for the tips endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TipsQuery {
    /// Tip category; defaults to `both` when absent
    pub category: Option<String>,
}

/// GET /api/v1/tips response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsResponse {
    pub category: TipCategory,
    pub tips: Vec<String>,
}

/// GET /api/v1/tips/random response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomTipResponse {
    pub category: TipCategory,
    pub tip: String,
}
