//! BMI Companion Shared Library
//!
//! This crate contains the domain logic shared by the backend and the
//! WASM module: measurement parsing, BMI evaluation, and the tip catalog.

pub mod bmi;
pub mod errors;
pub mod tips;
pub mod types;
pub mod units;

// Re-export commonly used items
pub use bmi::*;
pub use errors::*;
pub use tips::*;
pub use units::*;
