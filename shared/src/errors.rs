//! Error types for the BMI Companion application

use thiserror::Error;

/// Errors surfaced when evaluating a BMI request.
///
/// Both variants are user-visible and non-fatal; the messages are shown
/// verbatim so the user can correct their input and retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Please enter both height and weight.")]
    MissingInput,

    #[error("Invalid height or weight input")]
    InvalidMeasurement,
}
