//! BMI evaluation service
//!
//! Takes the raw form input as typed by the user and turns it into a
//! complete BMI reading: missing-input check, unit conversion to canonical
//! units, then evaluation.

use bmi_companion_shared::bmi::{evaluate_bmi, BmiReading};
use bmi_companion_shared::errors::EvaluationError;
use bmi_companion_shared::units::{convert_height, convert_weight};

/// Service for BMI evaluation
pub struct BmiService;

impl BmiService {
    /// Evaluate BMI from raw height and weight strings.
    ///
    /// Blank input is reported as missing before any conversion is
    /// attempted; input that converts to the `0.0` sentinel (unparsable,
    /// zero-valued, or ambiguous units) is reported as invalid.
    pub fn evaluate(raw_height: &str, raw_weight: &str) -> Result<BmiReading, EvaluationError> {
        if raw_height.trim().is_empty() || raw_weight.trim().is_empty() {
            return Err(EvaluationError::MissingInput);
        }

        let height_m = convert_height(raw_height);
        let weight_kg = convert_weight(raw_weight);

        evaluate_bmi(height_m, weight_kg)
    }
}
