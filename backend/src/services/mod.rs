//! Business logic services
//!
//! Services encapsulate business logic on top of the shared domain crate.

pub mod bmi;
pub mod tips;

pub use bmi::BmiService;
pub use tips::TipsService;
