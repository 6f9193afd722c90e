//! Measurement parsing and unit conversion module
//!
//! Height and weight arrive as free text with an optional unit suffix
//! (`"170cm"`, `"5.5ft"`, `"150lbs"`, `"70kg"`). Everything is converted
//! to canonical units at the boundary: meters for height, kilograms for
//! weight.
//!
//! # Design Principles
//!
//! 1. **Canonical Internally**: All downstream logic works on meters/kg
//! 2. **Fail Soft**: Unparsable input converts to the `0.0` sentinel,
//!    which the caller checks explicitly; parsing never panics
//! 3. **Conversion at Boundaries**: Convert on input, not in business logic

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meters per foot
pub const FEET_TO_METERS: f64 = 0.3048;
/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

// ============================================================================
// Height Units
// ============================================================================

/// Recognized height unit suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    Ft,
}

impl HeightUnit {
    /// All recognized height units, in match order
    pub const ALL: [HeightUnit; 2] = [HeightUnit::Cm, HeightUnit::Ft];

    /// The suffix token this unit is recognized by
    pub fn token(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Ft => "ft",
        }
    }

    /// Convert a value in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value / 100.0,
            HeightUnit::Ft => value * FEET_TO_METERS,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "ft" | "foot" | "feet" => Ok(HeightUnit::Ft),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Recognized weight unit suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl WeightUnit {
    /// All recognized weight units, in match order
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Lbs, WeightUnit::Kg];

    /// The suffix token this unit is recognized by
    pub fn token(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    /// Convert a value in this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * LBS_TO_KG,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Free-Text Conversion
// ============================================================================

/// What a raw measurement string is supposed to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    Height,
    Weight,
}

/// Parse the numeric remainder after a unit token has been stripped.
/// Returns the `0.0` sentinel for anything that is not a finite number.
fn parse_stripped(raw: &str, token: &str) -> f64 {
    parse_plain(raw.replace(token, "").trim())
}

/// Parse a bare numeric string, degrading to the `0.0` sentinel on failure.
///
/// The whole string must be a number: trailing junk ("1.75m", "70kgs") is
/// not salvaged as a numeric prefix, it converts to the sentinel.
fn parse_plain(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Convert a raw height string to meters.
///
/// Recognizes the `cm` and `ft` suffixes; a suffix-free string is parsed
/// as meters directly. Blank input, unparsable input, and input carrying
/// more than one unit token (ambiguous, e.g. `"5cm ft"`) all convert to
/// the `0.0` sentinel.
pub fn convert_height(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    let matched: Vec<HeightUnit> = HeightUnit::ALL
        .into_iter()
        .filter(|unit| raw.contains(unit.token()))
        .collect();

    match matched.as_slice() {
        [] => parse_plain(raw),
        [unit] => unit.to_meters(parse_stripped(raw, unit.token())),
        // More than one unit token is ambiguous, reject
        _ => 0.0,
    }
}

/// Convert a raw weight string to kilograms.
///
/// Recognizes the `lbs` and `kg` suffixes; a suffix-free string is parsed
/// as kilograms directly. Blank, unparsable, and ambiguous input all
/// convert to the `0.0` sentinel.
pub fn convert_weight(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    let matched: Vec<WeightUnit> = WeightUnit::ALL
        .into_iter()
        .filter(|unit| raw.contains(unit.token()))
        .collect();

    match matched.as_slice() {
        [] => parse_plain(raw),
        [unit] => unit.to_kg(parse_stripped(raw, unit.token())),
        _ => 0.0,
    }
}

/// Convert a raw measurement string to its canonical unit
pub fn convert_units(raw: &str, kind: MeasurementKind) -> f64 {
    match kind {
        MeasurementKind::Height => convert_height(raw),
        MeasurementKind::Weight => convert_weight(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // Height Conversion Tests
    // =========================================================================

    #[rstest]
    #[case("170cm", 1.70)]
    #[case("170 cm", 1.70)]
    #[case(" 170cm ", 1.70)]
    #[case("5.5ft", 1.6764)]
    #[case("6ft", 1.8288)]
    #[case("1.75", 1.75)]
    fn height_conversion_table(#[case] raw: &str, #[case] expected_m: f64) {
        let meters = convert_height(raw);
        assert!(
            (meters - expected_m).abs() < 1e-9,
            "{:?} converted to {} m, expected {} m",
            raw,
            meters,
            expected_m
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abccm")]
    #[case("abcft")]
    #[case("abc")]
    #[case("5cm ft")] // ambiguous: two unit tokens
    #[case("ftcm")]
    #[case("1.75m")] // unrecognized suffix, no numeric-prefix salvage
    fn height_invalid_inputs_convert_to_zero(#[case] raw: &str) {
        assert_eq!(convert_height(raw), 0.0, "{:?} should convert to 0", raw);
    }

    // =========================================================================
    // Weight Conversion Tests
    // =========================================================================

    #[rstest]
    #[case("150lbs", 68.0388)]
    #[case("150 lbs", 68.0388)]
    #[case("70kg", 70.0)]
    #[case(" 70 kg ", 70.0)]
    #[case("70", 70.0)]
    fn weight_conversion_table(#[case] raw: &str, #[case] expected_kg: f64) {
        let kg = convert_weight(raw);
        assert!(
            (kg - expected_kg).abs() < 1e-9,
            "{:?} converted to {} kg, expected {} kg",
            raw,
            kg,
            expected_kg
        );
    }

    #[rstest]
    #[case("")]
    #[case("abckg")]
    #[case("abclbs")]
    #[case("abc")]
    #[case("10lbs kg")] // ambiguous: two unit tokens
    #[case("70kgs")] // leftover after stripping "kg", no numeric-prefix salvage
    fn weight_invalid_inputs_convert_to_zero(#[case] raw: &str) {
        assert_eq!(convert_weight(raw), 0.0, "{:?} should convert to 0", raw);
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(convert_units("170cm", MeasurementKind::Height), 1.70);
        assert_eq!(convert_units("70kg", MeasurementKind::Weight), 70.0);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(HeightUnit::Cm.to_string(), "cm");
        assert_eq!(HeightUnit::Ft.to_string(), "ft");
        assert_eq!(WeightUnit::Kg.to_string(), "kg");
        assert_eq!(WeightUnit::Lbs.to_string(), "lbs");
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("cm".parse::<HeightUnit>().unwrap(), HeightUnit::Cm);
        assert_eq!("feet".parse::<HeightUnit>().unwrap(), HeightUnit::Ft);
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kg);
        assert_eq!("pounds".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("LBS".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert!("invalid".parse::<HeightUnit>().is_err());
        assert!("invalid".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&HeightUnit::Ft).unwrap(), "\"ft\"");
        assert_eq!(serde_json::to_string(&WeightUnit::Lbs).unwrap(), "\"lbs\"");
        let unit: WeightUnit = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(unit, WeightUnit::Kg);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: cm-suffixed input converts to value / 100
        #[test]
        fn prop_cm_suffix_divides_by_100(cm in 50.0f64..300.0) {
            let raw = format!("{}cm", cm);
            let meters = convert_height(&raw);
            prop_assert!((meters - cm / 100.0).abs() < 1e-9,
                "{} -> {} m, expected {} m", raw, meters, cm / 100.0);
        }

        /// Property: ft-suffixed input converts with the 0.3048 factor
        #[test]
        fn prop_ft_suffix_uses_feet_factor(ft in 1.0f64..9.0) {
            let raw = format!("{}ft", ft);
            let meters = convert_height(&raw);
            prop_assert!((meters - ft * FEET_TO_METERS).abs() < 1e-9);
        }

        /// Property: lbs-suffixed input converts with the 0.453592 factor
        #[test]
        fn prop_lbs_suffix_uses_pound_factor(lbs in 40.0f64..1000.0) {
            let raw = format!("{}lbs", lbs);
            let kg = convert_weight(&raw);
            prop_assert!((kg - lbs * LBS_TO_KG).abs() < 1e-9);
        }

        /// Property: kg-suffixed input passes through unchanged
        #[test]
        fn prop_kg_suffix_is_identity(kg in 20.0f64..500.0) {
            let raw = format!("{}kg", kg);
            prop_assert_eq!(convert_weight(&raw), kg);
        }

        /// Property: suffix-free numeric input passes through unchanged
        #[test]
        fn prop_plain_number_is_identity(value in 0.1f64..500.0) {
            let raw = format!("{}", value);
            prop_assert_eq!(convert_height(&raw), value);
            prop_assert_eq!(convert_weight(&raw), value);
        }
    }
}
