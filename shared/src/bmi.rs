//! BMI evaluation module
//!
//! Computes body-mass-index from canonical measurements and classifies it
//! into a category band.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Validated Inputs**: A reading is only produced for strictly
//!    positive, finite measurements; everything else is refused
//! 3. **Display Semantics**: The value is rounded to two decimal places
//!    and the category is derived from that rounded value, since that is
//!    what the user sees

use crate::errors::EvaluationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Category Bands
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::NormalWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obesity => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// A complete BMI evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// BMI value, rounded to two decimal places
    pub value: f64,
    /// Category band for the rounded value
    pub category: BmiCategory,
    /// Canonical height the reading was computed from
    pub height_m: f64,
    /// Canonical weight the reading was computed from
    pub weight_kg: f64,
}

/// Calculate raw BMI from canonical measurements
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Round a BMI value to the two decimal places shown to the user
pub fn round_for_display(bmi: f64) -> f64 {
    (bmi * 100.0).round() / 100.0
}

/// Classify a BMI value into its category band
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Evaluate BMI from canonical measurements.
///
/// Refuses to produce a reading unless both measurements are strictly
/// positive and finite; a `0.0` here is the converter's fail-soft sentinel
/// for blank or unparsable input.
pub fn evaluate_bmi(height_m: f64, weight_kg: f64) -> Result<BmiReading, EvaluationError> {
    if !height_m.is_finite() || !weight_kg.is_finite() || height_m <= 0.0 || weight_kg <= 0.0 {
        return Err(EvaluationError::InvalidMeasurement);
    }

    let value = round_for_display(calculate_bmi(weight_kg, height_m));

    Ok(BmiReading {
        value,
        category: classify_bmi(value),
        height_m,
        weight_kg,
    })
}
